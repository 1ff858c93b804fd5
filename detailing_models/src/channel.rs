use std::{fmt, ops::Deref, sync::LazyLock};

use regex::Regex;
use url::Url;

use crate::{booking::FormattedMessage, device::DeviceClass, macros::nutype_string};

pub static RECIPIENT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{6,15}$").unwrap());

nutype_string!(
    /// International phone number of the messaging recipient, digits only.
    RecipientNumber(validate(regex = RECIPIENT_NUMBER_REGEX))
);

/// Where booking messages are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEndpoints {
    pub recipient: RecipientNumber,
    /// Base of the app deep link, e.g. `whatsapp://send`.
    pub app_url: Url,
    /// Base of the web client link, e.g. `https://web.whatsapp.com/send`.
    pub web_url: Url,
    /// Base of the short web link, e.g. `https://wa.me/`. The recipient is
    /// appended as a path segment.
    pub alternate_url: Url,
}

impl ChannelEndpoints {
    pub fn app_uri(&self, message: &FormattedMessage) -> ChannelUri {
        self.query_uri(&self.app_url, message)
    }

    pub fn web_uri(&self, message: &FormattedMessage) -> ChannelUri {
        self.query_uri(&self.web_url, message)
    }

    pub fn alternate_uri(&self, message: &FormattedMessage) -> ChannelUri {
        ChannelUri(format!(
            "{}/{}?text={message}",
            self.alternate_url.as_str().trim_end_matches('/'),
            *self.recipient
        ))
    }

    /// The uri the channel is first opened with.
    pub fn primary_uri(&self, device: DeviceClass, message: &FormattedMessage) -> ChannelUri {
        match device {
            DeviceClass::Mobile => self.app_uri(message),
            DeviceClass::Desktop => self.web_uri(message),
        }
    }

    /// The uri offered to the user as a link once the request is submitted.
    pub fn manual_uri(&self, device: DeviceClass, message: &FormattedMessage) -> ChannelUri {
        match device {
            DeviceClass::Mobile => self.app_uri(message),
            DeviceClass::Desktop => self.alternate_uri(message),
        }
    }

    // The message is already query encoded and must not pass through `Url`.
    fn query_uri(&self, base: &Url, message: &FormattedMessage) -> ChannelUri {
        ChannelUri(format!(
            "{}?phone={}&text={message}",
            base.as_str().trim_end_matches('/'),
            *self.recipient
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelUri(String);

impl ChannelUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ChannelUri {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ChannelUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn endpoints() -> ChannelEndpoints {
        ChannelEndpoints {
            recipient: "27832688029".try_into().unwrap(),
            app_url: "whatsapp://send".parse().unwrap(),
            web_url: "https://web.whatsapp.com/send".parse().unwrap(),
            alternate_url: "https://wa.me/".parse().unwrap(),
        }
    }

    #[test]
    fn uris() {
        // Arrange
        let sut = endpoints();
        let message = FormattedMessage::from_lines(["Hi", "there"]);

        // Act + Assert
        assert_eq!(
            sut.app_uri(&message).as_str(),
            "whatsapp://send?phone=27832688029&text=Hi%0Athere"
        );
        assert_eq!(
            sut.web_uri(&message).as_str(),
            "https://web.whatsapp.com/send?phone=27832688029&text=Hi%0Athere"
        );
        assert_eq!(
            sut.alternate_uri(&message).as_str(),
            "https://wa.me/27832688029?text=Hi%0Athere"
        );
    }

    #[test]
    fn per_device() {
        let sut = endpoints();
        let message = FormattedMessage::from_lines(["Hi"]);

        assert_eq!(
            sut.primary_uri(DeviceClass::Mobile, &message),
            sut.app_uri(&message)
        );
        assert_eq!(
            sut.primary_uri(DeviceClass::Desktop, &message),
            sut.web_uri(&message)
        );
        assert_eq!(
            sut.manual_uri(DeviceClass::Mobile, &message),
            sut.app_uri(&message)
        );
        assert_eq!(
            sut.manual_uri(DeviceClass::Desktop, &message),
            sut.alternate_uri(&message)
        );
    }

    #[test]
    fn recipient_number() {
        assert!(RecipientNumber::try_new("27832688029").is_ok());
        assert!(RecipientNumber::try_new("+27 83 268 8029").is_err());
        assert!(RecipientNumber::try_new("123").is_err());
    }
}
