use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric decomposition of a version string, comparable component-wise.
///
/// Missing components are zero, so `"12.1"` and `"12.1.0.0"` compare equal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VersionNo {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

impl VersionNo {
    pub const fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
        }
    }

    /// Decompose `version` left to right on `.`.  Each component takes its leading run of digits; a
    /// component with no leading digits counts as zero.  Once a component
    /// carries a non-numeric tail (`1b4948`, `2254/66`) the rest of the input
    /// is treated as a build tag and ignored.
    ///
    /// Never fails: garbage yields a partial or all-zero tuple.
    pub fn parse(version: &str) -> Self {
        let mut parts = [0u32; 4];
        let mut slots = parts.iter_mut();

        for component in version.split('.') {
            let Some(slot) = slots.next() else { break };

            let digits = component
                .bytes()
                .take_while(|b| b.is_ascii_digit())
                .fold(0u32, |acc, b| {
                    acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
                });
            *slot = digits;

            if component.bytes().any(|b| !b.is_ascii_digit()) {
                break;
            }
        }

        let [major, minor, patch, build] = parts;
        Self::new(major, minor, patch, build)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&str> for VersionNo {
    fn from(version: &str) -> Self {
        Self::parse(version)
    }
}

impl fmt::Display for VersionNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_dotted_version() {
        assert_eq!(VersionNo::parse("12.1.3"), VersionNo::new(12, 1, 3, 0));
        assert_eq!(
            VersionNo::parse("59.0.3071.115"),
            VersionNo::new(59, 0, 3071, 115)
        );
    }

    #[test]
    fn empty_is_zero() {
        assert!(VersionNo::parse("").is_zero());
    }

    #[test]
    fn build_suffix_is_tolerated() {
        let v = VersionNo::parse("8.1.1b4948");
        assert_eq!((v.major, v.minor), (8, 1));
        assert_eq!(v, VersionNo::new(8, 1, 1, 0));
    }

    #[test]
    fn slash_sub_version_stops_parsing() {
        assert_eq!(
            VersionNo::parse("28.0.2254/66.318"),
            VersionNo::new(28, 0, 2254, 0)
        );
    }

    #[test]
    fn underscore_is_a_build_tag() {
        assert_eq!(VersionNo::parse("10_3_2"), VersionNo::new(10, 0, 0, 0));
        assert_eq!(VersionNo::parse("6.0_1"), VersionNo::new(6, 0, 0, 0));
    }

    #[test]
    fn non_numeric_is_zero() {
        assert!(VersionNo::parse("x86_64").is_zero());
        assert!(VersionNo::parse("FBIOS").is_zero());
    }

    #[test]
    fn extra_components_are_dropped() {
        assert_eq!(
            VersionNo::parse("1.2.3.4.5.6"),
            VersionNo::new(1, 2, 3, 4)
        );
    }

    #[test]
    fn huge_component_saturates() {
        assert_eq!(VersionNo::parse("99999999999").major, u32::MAX);
    }

    #[test]
    fn ordering_is_component_wise() {
        assert!(VersionNo::parse("10.0") > VersionNo::parse("9.9.9"));
        assert!(VersionNo::parse("4.3") < VersionNo::parse("4.3.1"));
        assert_eq!(VersionNo::parse("12.1"), VersionNo::parse("12.1.0.0"));
    }

    #[test]
    fn display_renders_all_components() {
        assert_eq!(VersionNo::parse("6.1").to_string(), "6.1.0.0");
    }
}
