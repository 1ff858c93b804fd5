use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

pub static MOBILE_SIGNATURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini").unwrap()
});

/// The kind of device a page is viewed on, which decides how the messaging
/// channel is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Classifies a platform signature (a user agent string).
    pub fn classify(signature: &str) -> Self {
        if MOBILE_SIGNATURE_REGEX.is_match(signature) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => f.write_str("mobile"),
            Self::Desktop => f.write_str("desktop"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDeviceClass(pub String);

impl fmt::Display for UnknownDeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown device class {:?}, expected mobile or desktop", self.0)
    }
}

impl std::error::Error for UnknownDeviceClass {}

impl FromStr for DeviceClass {
    type Err = UnknownDeviceClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mobile" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            _ => Err(UnknownDeviceClass(s.into())),
        }
    }
}
