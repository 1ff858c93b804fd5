//! Wires the page features to the terminal implementations.

use detailing_browser_impl::{
    TerminalBookingView, TerminalBrowsingContext, TerminalFaqView, TerminalNavView,
};
use detailing_config::Config;
use detailing_core_booking_impl::{BookingFeatureConfig, BookingFeatureServiceImpl};
use detailing_core_faq_impl::{FaqFeatureConfig, FaqFeatureServiceImpl};
use detailing_core_nav_impl::NavFeatureServiceImpl;
use detailing_shared_impl::time::TimeServiceImpl;

pub type BookingFeature =
    BookingFeatureServiceImpl<TerminalBrowsingContext, TerminalBookingView, TimeServiceImpl>;

pub type NavFeature = NavFeatureServiceImpl<TerminalNavView>;

pub type FaqFeature = FaqFeatureServiceImpl<TerminalFaqView>;

pub fn booking_feature(
    config: &Config,
    browser: TerminalBrowsingContext,
    view: TerminalBookingView,
) -> BookingFeature {
    BookingFeatureServiceImpl::new(
        browser,
        view,
        TimeServiceImpl,
        booking_feature_config(config),
    )
}

pub fn booking_feature_config(config: &Config) -> BookingFeatureConfig {
    BookingFeatureConfig {
        business_name: config.booking.business_name.clone(),
        channel: config.channel.endpoints(),
        submit_delay: config.booking.submit_delay.into(),
        fallback_delay: config.booking.fallback_delay.into(),
        min_lead_days: config.booking.min_lead_days,
    }
}

pub fn nav_feature(view: TerminalNavView) -> NavFeature {
    NavFeatureServiceImpl::new(view)
}

pub fn faq_feature(config: &Config, view: TerminalFaqView) -> FaqFeature {
    FaqFeatureServiceImpl::new(
        view,
        FaqFeatureConfig {
            items: config.page.faq_items,
        },
    )
}
