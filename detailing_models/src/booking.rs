use std::{fmt, ops::Deref, sync::LazyLock};

use regex::Regex;
use tracing::debug;

use crate::macros::nutype_string;

pub static BOOKING_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub static BOOKING_PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9 ()+\-]+$").unwrap());

nutype_string!(BookingEmail(validate(regex = BOOKING_EMAIL_REGEX)));
nutype_string!(BookingPhone(validate(regex = BOOKING_PHONE_REGEX)));

/// The fields of the booking form, keyed by the names the page submits them
/// under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    FirstName,
    LastName,
    Email,
    Phone,
    Service,
    Addons,
    Date,
    Time,
    Location,
    Vehicle,
    Message,
}

impl BookingField {
    pub const ALL: [Self; 11] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Service,
        Self::Addons,
        Self::Date,
        Self::Time,
        Self::Location,
        Self::Vehicle,
        Self::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::Addons => "addons",
            Self::Date => "date",
            Self::Time => "time",
            Self::Location => "location",
            Self::Vehicle => "vehicle",
            Self::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// The field values of a single submission attempt.
///
/// Missing fields are empty. Only `email` and `phone` are checked, see
/// [`BookingRequest::into_valid`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    /// Selected add-ons in selection order.
    pub addons: Vec<String>,
    pub date: String,
    pub time: String,
    pub location: String,
    pub vehicle: String,
    pub message: String,
}

impl BookingRequest {
    /// Collects a request from submitted `(name, value)` pairs.
    ///
    /// `addons` accumulates, any other known field keeps its last value and
    /// unknown names are skipped.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut request = Self::default();
        for (name, value) in pairs {
            let name = name.as_ref();
            let Some(field) = BookingField::from_name(name) else {
                debug!(name, "Ignoring unknown booking form field");
                continue;
            };
            request.set(field, value.into());
        }
        request
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(body.as_bytes()))
    }

    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::Addons => {
                self.addons.push(value);
                return;
            }
            BookingField::FirstName => &mut self.first_name,
            BookingField::LastName => &mut self.last_name,
            BookingField::Email => &mut self.email,
            BookingField::Phone => &mut self.phone,
            BookingField::Service => &mut self.service,
            BookingField::Date => &mut self.date,
            BookingField::Time => &mut self.time,
            BookingField::Location => &mut self.location,
            BookingField::Vehicle => &mut self.vehicle,
            BookingField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Attaches the checked contact fields, turning this into a request that
    /// may be composed into a message.
    pub fn into_valid(self, email: BookingEmail, phone: BookingPhone) -> ValidBookingRequest {
        ValidBookingRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            email,
            phone,
            service: self.service,
            addons: self.addons,
            date: self.date,
            time: self.time,
            location: self.location,
            vehicle: self.vehicle,
            message: self.message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: BookingEmail,
    pub phone: BookingPhone,
    pub service: String,
    pub addons: Vec<String>,
    pub date: String,
    pub time: String,
    pub location: String,
    pub vehicle: String,
    pub message: String,
}

impl ValidBookingRequest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn vehicle(&self) -> Option<&str> {
        non_empty(&self.vehicle)
    }

    pub fn message(&self) -> Option<&str> {
        non_empty(&self.message)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// A field whose value failed its format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidField {
    Email,
    Phone,
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::Phone => f.write_str("phone"),
        }
    }
}

/// A composed booking message. Line breaks are encoded as `%0A` so the text
/// can be placed into a URL query as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedMessage(String);

impl FormattedMessage {
    pub const LINE_BREAK: &'static str = "%0A";

    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self(lines.into_iter().collect::<Vec<_>>().join(Self::LINE_BREAK))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the decoded lines of the message.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split(Self::LINE_BREAK)
    }
}

impl Deref for FormattedMessage {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn email_shape() {
        for (input, valid) in [
            ("jo@soap.com", true),
            ("JO@SOAP.CO.ZA", true),
            ("a@b.c", true),
            ("jo@soap", false),
            ("jo.soap.com", false),
            ("jo @soap.com", false),
            ("jo@so ap.com", false),
            ("jo@@soap.com", false),
            ("@soap.com", false),
            ("jo@soap.", false),
            ("", false),
        ] {
            assert_eq!(BookingEmail::try_new(input).is_ok(), valid, "{input:?}");
        }
    }

    #[test]
    fn phone_shape() {
        for (input, valid) in [
            ("071 234 5678", true),
            ("+27 (83) 268-8029", true),
            ("0712345678", true),
            ("071-234-567x", false),
            ("071.234.5678", false),
            ("071\t234", false),
            ("", false),
        ] {
            assert_eq!(BookingPhone::try_new(input).is_ok(), valid, "{input:?}");
        }
    }

    #[test]
    fn from_pairs_keeps_addon_order() {
        // Act
        let request = BookingRequest::from_pairs([
            ("firstName", "Jo"),
            ("addons", "wax"),
            ("service", "Full Detail"),
            ("addons", "interior"),
            ("utm_source", "flyer"),
        ]);

        // Assert
        assert_eq!(
            request,
            BookingRequest {
                first_name: "Jo".into(),
                service: "Full Detail".into(),
                addons: vec!["wax".into(), "interior".into()],
                ..Default::default()
            }
        );
    }

    #[test]
    fn from_urlencoded() {
        // Act
        let request = BookingRequest::from_urlencoded(
            "firstName=Jo&lastName=Soap&email=jo%40soap.com&phone=071+234+5678&addons=wax\
             &message=Gate+code%3A+1234&firstName=Joanne",
        );

        // Assert
        assert_eq!(request.first_name, "Joanne");
        assert_eq!(request.email, "jo@soap.com");
        assert_eq!(request.phone, "071 234 5678");
        assert_eq!(request.addons, ["wax"]);
        assert_eq!(request.message, "Gate code: 1234");
        assert_eq!(request.vehicle, "");
    }

    #[test]
    fn message_lines() {
        let message = FormattedMessage::from_lines(["a", "", "b"]);
        assert_eq!(message.as_str(), "a%0A%0Ab");
        assert_eq!(message.lines().collect::<Vec<_>>(), ["a", "", "b"]);
    }
}
