use super::{FormFactor, VersionNo};
use crate::names::{client, os};
use serde::{Deserialize, Serialize};

/// Everything the classifier could tell about one User-Agent string.
///
/// Fields that could not be determined keep their zero value (empty string,
/// `false`, all-zero [`VersionNo`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The input, unmodified.
    pub raw: String,
    /// First absolute `http(s)://` URL embedded in the input.
    pub url: String,
    pub name: String,
    pub version: String,
    pub version_no: VersionNo,
    pub os: String,
    pub os_version: String,
    pub os_version_no: VersionNo,
    /// Best-effort hardware model, e.g. `GT-I9300` or `iPad`.
    pub device: String,
    pub mobile: bool,
    pub tablet: bool,
    pub desktop: bool,
    pub bot: bool,
}

impl Classification {
    pub(crate) fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            ..Self::default()
        }
    }

    /// Collapse the device-class flags into one value.
    ///
    /// Bots win over everything else, then tablet, mobile and desktop.
    pub fn form_factor(&self) -> FormFactor {
        if self.bot {
            FormFactor::Bot
        } else if self.tablet {
            FormFactor::Tablet
        } else if self.mobile {
            FormFactor::Mobile
        } else if self.desktop {
            FormFactor::Desktop
        } else {
            FormFactor::Unknown
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.name.is_empty()
    }

    pub fn is_android(&self) -> bool {
        self.os == os::ANDROID
    }
    pub fn is_ios(&self) -> bool {
        self.os == os::IOS
    }
    pub fn is_windows(&self) -> bool {
        self.os == os::WINDOWS
    }
    pub fn is_windows_phone(&self) -> bool {
        self.os == os::WINDOWS_PHONE
    }
    pub fn is_macos(&self) -> bool {
        self.os == os::MACOS
    }
    pub fn is_linux(&self) -> bool {
        self.os == os::LINUX
    }
    pub fn is_freebsd(&self) -> bool {
        self.os == os::FREEBSD
    }
    pub fn is_chromeos(&self) -> bool {
        self.os == os::CHROMEOS
    }
    pub fn is_blackberry(&self) -> bool {
        self.os == os::BLACKBERRY
    }
    pub fn is_harmonyos(&self) -> bool {
        self.os == os::HARMONYOS
    }

    pub fn is_chrome(&self) -> bool {
        self.name == client::CHROME
    }
    pub fn is_firefox(&self) -> bool {
        self.name == client::FIREFOX
    }
    pub fn is_safari(&self) -> bool {
        self.name == client::SAFARI
    }
    pub fn is_edge(&self) -> bool {
        self.name == client::EDGE
    }
    pub fn is_opera(&self) -> bool {
        self.name == client::OPERA
    }
    pub fn is_opera_mini(&self) -> bool {
        self.name == client::OPERA_MINI
    }
    pub fn is_internet_explorer(&self) -> bool {
        self.name == client::INTERNET_EXPLORER
    }
    pub fn is_googlebot(&self) -> bool {
        self.name == client::GOOGLEBOT
    }
    pub fn is_twitterbot(&self) -> bool {
        self.name == client::TWITTERBOT
    }
    pub fn is_facebookbot(&self) -> bool {
        self.name == client::FACEBOOK_EXTERNAL_HIT
    }
}
