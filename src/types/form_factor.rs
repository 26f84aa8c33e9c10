use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Single-valued summary of the device-class flags of a
/// [`Classification`](super::Classification).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFactor {
    Bot,
    Tablet,
    Mobile,
    Desktop,
    Unknown,
}

impl FormFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bot => "bot",
            Self::Tablet => "tablet",
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormFactor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bot" | "crawler" => Ok(Self::Bot),
            "tablet" => Ok(Self::Tablet),
            "mobile" | "smartphone" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            "unknown" | "" => Ok(Self::Unknown),
            _ => Err(Error::UnknownFormFactor(s.to_owned())),
        }
    }
}

impl Serialize for FormFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FormFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Tablet".parse::<FormFactor>().unwrap(), FormFactor::Tablet);
        assert_eq!("SMARTPHONE".parse::<FormFactor>().unwrap(), FormFactor::Mobile);
    }

    #[test]
    fn unknown_text_is_an_error() {
        let err = "toaster".parse::<FormFactor>().unwrap_err();
        assert!(matches!(err, Error::UnknownFormFactor(ref s) if s == "toaster"));
    }

    #[test]
    fn display_matches_as_str() {
        for ff in [
            FormFactor::Bot,
            FormFactor::Tablet,
            FormFactor::Mobile,
            FormFactor::Desktop,
            FormFactor::Unknown,
        ] {
            assert_eq!(ff.to_string(), ff.as_str());
            assert_eq!(ff.as_str().parse::<FormFactor>().unwrap(), ff);
        }
    }
}
