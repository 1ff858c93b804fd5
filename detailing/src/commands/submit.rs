use anyhow::ensure;
use clap::Args;
use detailing_browser_impl::{TerminalBookingView, TerminalBrowsingContext};
use detailing_config::Config;
use detailing_core_booking_contracts::{BookingFeatureService, SubmitReceipt};
use detailing_models::booking::BookingRequest;
use tracing::info;

use super::{FormArgs, DEFAULT_USER_AGENT};
use crate::environment;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    #[command(flatten)]
    form: FormArgs,
    /// Platform signature reported by the browsing context
    #[arg(long, short, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Refuse to open new browsing contexts like a popup blocker would
    #[arg(long)]
    block_popups: bool,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let request = self.form.read()?;
        let browser = TerminalBrowsingContext::new(self.user_agent, self.block_popups);
        let booking = environment::booking_feature(&config, browser, TerminalBookingView::new());
        run(&booking, request).await
    }
}

/// Runs a single submission on a freshly initialized form and waits until
/// the request has been handed to the messaging channel.
pub async fn run(
    booking: &impl BookingFeatureService,
    request: BookingRequest,
) -> anyhow::Result<()> {
    booking.init();

    let SubmitReceipt {
        device,
        primary_uri,
        handle,
        ..
    } = booking.submit(request).await?;
    info!(%device, uri = %primary_uri, "Booking request accepted");

    ensure!(
        handle.finished().await,
        "Booking request dispatch was cancelled"
    );
    Ok(())
}
