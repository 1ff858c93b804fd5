use detailing_browser_contracts::{MockBookingView, MockBrowsingContext};
use detailing_core_booking_contracts::{BookingFeatureService, ValidationFailure};
use detailing_demo::{BOOKING_FULL, BOOKING_FULL_VALID, BOOKING_MINIMAL, BOOKING_MINIMAL_VALID};
use detailing_models::booking::{BookingRequest, InvalidField};
use detailing_shared_contracts::time::MockTimeService;
use mockall::Sequence;
use pretty_assertions::assert_eq;

use super::sut;
use crate::{INVALID_EMAIL_NOTICE, INVALID_PHONE_NOTICE};

#[test]
fn ok() {
    // Arrange
    let sut = sut(
        MockBrowsingContext::new(),
        MockBookingView::new(),
        MockTimeService::new(),
    );

    // Act
    let minimal = sut.validate(BOOKING_MINIMAL.clone());
    let full = sut.validate(BOOKING_FULL.clone());

    // Assert
    assert_eq!(minimal.unwrap(), *BOOKING_MINIMAL_VALID);
    assert_eq!(full.unwrap(), *BOOKING_FULL_VALID);
}

#[test]
fn email_without_dot_after_at() {
    // Arrange
    let browser = MockBrowsingContext::new().with_alert(INVALID_EMAIL_NOTICE);
    let sut = sut(browser, MockBookingView::new(), MockTimeService::new());

    // Act
    let result = sut.validate(BookingRequest {
        email: "jo@soap".into(),
        ..BOOKING_MINIMAL.clone()
    });

    // Assert
    assert_eq!(
        result.unwrap_err(),
        ValidationFailure {
            fields: vec![InvalidField::Email]
        }
    );
}

#[test]
fn invalid_emails() {
    for email in ["jo.soap.com", "jo @soap.com", "jo@soap .com", "", "jo@soap."] {
        // Arrange
        let browser = MockBrowsingContext::new().with_alert(INVALID_EMAIL_NOTICE);
        let sut = sut(browser, MockBookingView::new(), MockTimeService::new());

        // Act
        let result = sut.validate(BookingRequest {
            email: email.into(),
            ..BOOKING_MINIMAL.clone()
        });

        // Assert
        assert_eq!(result.unwrap_err().fields, [InvalidField::Email], "{email:?}");
    }
}

#[test]
fn invalid_phones() {
    for phone in ["071 234 567x", "071.234.5678", "+27#83", "", "０７１"] {
        // Arrange
        let browser = MockBrowsingContext::new().with_alert(INVALID_PHONE_NOTICE);
        let sut = sut(browser, MockBookingView::new(), MockTimeService::new());

        // Act
        let result = sut.validate(BookingRequest {
            phone: phone.into(),
            ..BOOKING_MINIMAL.clone()
        });

        // Assert
        assert_eq!(result.unwrap_err().fields, [InvalidField::Phone], "{phone:?}");
    }
}

#[test]
fn reports_every_invalid_field_in_order() {
    // Arrange
    let mut seq = Sequence::new();
    let mut browser = MockBrowsingContext::new();
    browser
        .expect_alert()
        .once()
        .in_sequence(&mut seq)
        .withf(|message| message == INVALID_EMAIL_NOTICE)
        .return_const(());
    browser
        .expect_alert()
        .once()
        .in_sequence(&mut seq)
        .withf(|message| message == INVALID_PHONE_NOTICE)
        .return_const(());

    let sut = sut(browser, MockBookingView::new(), MockTimeService::new());

    // Act
    let result = sut.validate(BookingRequest {
        email: "not an email".into(),
        phone: "call me".into(),
        ..BOOKING_MINIMAL.clone()
    });

    // Assert
    assert_eq!(
        result.unwrap_err().fields,
        [InvalidField::Email, InvalidField::Phone]
    );
}

#[test]
fn other_fields_are_not_checked() {
    // Arrange
    let sut = sut(
        MockBrowsingContext::new(),
        MockBookingView::new(),
        MockTimeService::new(),
    );

    // Act
    let result = sut.validate(BookingRequest {
        first_name: "".into(),
        service: "".into(),
        date: "whenever".into(),
        ..BOOKING_MINIMAL.clone()
    });

    // Assert
    assert!(result.is_ok());
}
