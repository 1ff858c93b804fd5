use detailing_models::booking::{FormattedMessage, ValidBookingRequest};

const CUSTOMER_HEADER: &str = "*📋 Customer Details:*";
const SERVICE_HEADER: &str = "*🔧 Service Details:*";
const BOOKING_HEADER: &str = "*📅 Booking Information:*";
const VEHICLE_HEADER: &str = "*🚙 Vehicle Details:*";
const ADDITIONAL_HEADER: &str = "*💬 Additional Information:*";
const SEPARATOR: &str = "----";

/// Lays out a booking request as the message sent to `business_name`.
///
/// Field values are inserted as they were entered. The vehicle and
/// additional information sections only appear when filled in.
pub fn compose(business_name: &str, request: &ValidBookingRequest) -> FormattedMessage {
    let mut lines = vec![
        format!("*🚗 New Booking Request - {business_name}*"),
        String::new(),
        CUSTOMER_HEADER.into(),
        format!("Name: {}", request.full_name()),
        format!("Email: {}", *request.email),
        format!("Phone: {}", *request.phone),
        String::new(),
        SERVICE_HEADER.into(),
        format!("Service: {}", request.service),
    ];

    if !request.addons.is_empty() {
        lines.push(format!("Add-ons: {}", request.addons.join(", ")));
    }

    lines.extend([
        String::new(),
        BOOKING_HEADER.into(),
        format!("Preferred Date: {}", request.date),
        format!("Preferred Time: {}", request.time),
        format!("Service Location: {}", request.location),
    ]);

    if let Some(vehicle) = request.vehicle() {
        lines.extend([String::new(), VEHICLE_HEADER.into(), vehicle.into()]);
    }

    if let Some(message) = request.message() {
        lines.extend([String::new(), ADDITIONAL_HEADER.into(), message.into()]);
    }

    lines.extend([
        String::new(),
        SEPARATOR.into(),
        format!("_Sent via {business_name} Website_"),
    ]);

    FormattedMessage::from_lines(lines.iter().map(String::as_str))
}
