use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use chrono::{NaiveDate, TimeZone, Utc};
use detailing_browser_contracts::{ContextHandle, MockBookingView, MockBrowsingContext};
use detailing_demo::{BOOKING_MINIMAL_VALID, BUSINESS_NAME, CHANNEL};
use detailing_models::booking::FormattedMessage;
use detailing_shared_contracts::time::MockTimeService;
use tokio::time::Instant;

use crate::{BookingFeatureConfig, BookingFeatureServiceImpl};

mod validate;

type Sut = BookingFeatureServiceImpl<MockBrowsingContext, MockBookingView, MockTimeService>;

const SUBMIT_DELAY: Duration = Duration::from_millis(1000);
const FALLBACK_DELAY: Duration = Duration::from_millis(1500);

fn config() -> BookingFeatureConfig {
    BookingFeatureConfig {
        business_name: BUSINESS_NAME.into(),
        channel: CHANNEL.clone(),
        submit_delay: SUBMIT_DELAY,
        fallback_delay: FALLBACK_DELAY,
        min_lead_days: 1,
    }
}

fn sut(browser: MockBrowsingContext, view: MockBookingView, time: MockTimeService) -> Sut {
    BookingFeatureServiceImpl::new(browser, view, time, config())
}

fn minimal_message() -> FormattedMessage {
    crate::message::compose(BUSINESS_NAME, &BOOKING_MINIMAL_VALID)
}

fn today() -> MockTimeService {
    MockTimeService::new().with_now(Utc.with_ymd_and_hms(2025, 5, 20, 9, 0, 0).unwrap())
}

fn tomorrow() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 21).unwrap()
}

/// What happened to the browsing context, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Navigate(String),
    Open(String),
    Alert(String),
}

/// Records the channel calls of a [`MockBrowsingContext`] together with the
/// time elapsed since the recorder was created.
#[derive(Debug, Clone)]
struct Recorder {
    start: Instant,
    calls: Arc<Mutex<Vec<(Duration, Call)>>>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            calls: Default::default(),
        }
    }

    fn push(&self, call: Call) {
        self.calls
            .lock()
            .unwrap()
            .push((self.start.elapsed(), call));
    }

    fn calls(&self) -> Vec<(Duration, Call)> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns a browsing context with the given platform signature whose
    /// `open` calls return `open_result`.
    fn browser(
        &self,
        signature: &str,
        open_result: Option<ContextHandle>,
    ) -> MockBrowsingContext {
        let mut browser = MockBrowsingContext::new();
        browser
            .expect_platform_signature()
            .return_const(signature.to_owned());

        let recorder = self.clone();
        browser
            .expect_navigate()
            .returning(move |uri| recorder.push(Call::Navigate(uri.to_string())));

        let recorder = self.clone();
        browser.expect_open().returning(move |uri| {
            recorder.push(Call::Open(uri.to_string()));
            open_result
        });

        let recorder = self.clone();
        browser
            .expect_alert()
            .returning(move |message| recorder.push(Call::Alert(message.to_owned())));

        browser
    }
}
