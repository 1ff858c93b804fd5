use chrono::{DateTime, Utc};
use detailing_shared_contracts::time::TimeService;
use tracing::instrument;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[instrument(level = "trace", skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone};
    use detailing_shared_contracts::time::{earliest_booking_date, MockTimeService};

    use super::*;

    #[test]
    fn earliest_booking_date_is_next_utc_day() {
        // Arrange
        let time = MockTimeService::new()
            .with_now(Utc.with_ymd_and_hms(2025, 5, 31, 23, 30, 0).unwrap());

        // Act
        let result = earliest_booking_date(&time, 1);

        // Assert
        assert_eq!(result, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn now_moves_forward() {
        let sut = TimeServiceImpl;
        let first = sut.now();
        assert!(sut.now() >= first);
    }
}
