use std::sync::LazyLock;

use detailing_models::{
    booking::{BookingRequest, ValidBookingRequest},
    channel::ChannelEndpoints,
};

pub mod signatures;

pub const BUSINESS_NAME: &str = "SK Detailing";

pub static CHANNEL: LazyLock<ChannelEndpoints> = LazyLock::new(|| ChannelEndpoints {
    recipient: "27832688029".try_into().unwrap(),
    app_url: "whatsapp://send".parse().unwrap(),
    web_url: "https://web.whatsapp.com/send".parse().unwrap(),
    alternate_url: "https://wa.me/".parse().unwrap(),
});

/// A booking with only the required fields filled in.
pub static BOOKING_MINIMAL: LazyLock<BookingRequest> = LazyLock::new(|| BookingRequest {
    first_name: "Jo".into(),
    last_name: "Soap".into(),
    email: "jo@soap.com".into(),
    phone: "071 234 5678".into(),
    service: "Full Detail".into(),
    addons: vec![],
    date: "2025-06-01".into(),
    time: "10:00".into(),
    location: "Home".into(),
    vehicle: "".into(),
    message: "".into(),
});

/// A booking with every field filled in.
pub static BOOKING_FULL: LazyLock<BookingRequest> = LazyLock::new(|| BookingRequest {
    first_name: "Thandi".into(),
    last_name: "Nkosi".into(),
    email: "thandi.nkosi@example.co.za".into(),
    phone: "+27 (82) 555-0199".into(),
    service: "Paint Correction".into(),
    addons: vec!["wax".into(), "interior".into()],
    date: "2025-07-12".into(),
    time: "08:30".into(),
    location: "12 Long Street, Cape Town".into(),
    vehicle: "2019 VW Polo, white".into(),
    message: "Please call when you arrive.".into(),
});

pub static BOOKING_MINIMAL_VALID: LazyLock<ValidBookingRequest> =
    LazyLock::new(|| valid(&BOOKING_MINIMAL));

pub static BOOKING_FULL_VALID: LazyLock<ValidBookingRequest> =
    LazyLock::new(|| valid(&BOOKING_FULL));

fn valid(request: &BookingRequest) -> ValidBookingRequest {
    let request = request.clone();
    let email = request.email.as_str().try_into().unwrap();
    let phone = request.phone.as_str().try_into().unwrap();
    request.into_valid(email, phone)
}
