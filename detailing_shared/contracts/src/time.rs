use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TimeService: Send + Sync + 'static {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Returns the earliest date a booking may be requested for, `lead_days`
/// after the current UTC date.
pub fn earliest_booking_date(time: &impl TimeService, lead_days: u32) -> NaiveDate {
    (time.now() + TimeDelta::days(lead_days.into())).date_naive()
}

#[cfg(feature = "mock")]
impl MockTimeService {
    pub fn with_now(mut self, time: DateTime<Utc>) -> Self {
        self.expect_now().once().return_const(time);
        self
    }
}
