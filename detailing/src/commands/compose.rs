use std::fmt::Write;

use clap::Args;
use detailing_browser_impl::{TerminalBookingView, TerminalBrowsingContext};
use detailing_config::Config;
use detailing_core_booking_contracts::BookingFeatureService;
use detailing_models::{booking::BookingRequest, channel::ChannelEndpoints, device::DeviceClass};

use super::{FormArgs, DEFAULT_USER_AGENT};
use crate::environment;

#[derive(Debug, Args)]
pub struct ComposeCommand {
    #[command(flatten)]
    form: FormArgs,
    /// Platform signature used to classify the device
    #[arg(long, short, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Skip classification and compose for this device class
    #[arg(long, short, conflicts_with = "user_agent")]
    device: Option<DeviceClass>,
}

impl ComposeCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let request = self.form.read()?;
        let device = self
            .device
            .unwrap_or_else(|| DeviceClass::classify(&self.user_agent));

        let browser = TerminalBrowsingContext::new(self.user_agent, false);
        let booking = environment::booking_feature(&config, browser, TerminalBookingView::new());

        print!(
            "{}",
            report(&booking, &config.channel.endpoints(), request, device)?
        );
        Ok(())
    }
}

/// Validates and composes `request` and lists the decoded message together
/// with the links it would be sent through.
pub fn report(
    booking: &impl BookingFeatureService,
    channel: &ChannelEndpoints,
    request: BookingRequest,
    device: DeviceClass,
) -> anyhow::Result<String> {
    let request = booking.validate(request)?;
    let message = booking.compose(&request);

    let mut out = String::new();
    for line in message.lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    writeln!(out, "device  {device}")?;
    writeln!(out, "primary {}", channel.primary_uri(device, &message))?;
    writeln!(out, "manual  {}", channel.manual_uri(device, &message))?;
    Ok(out)
}
