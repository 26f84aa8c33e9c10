use crate::helpers::contains_tablet;
use crate::tokens::Tokens;
use fancy_regex::Regex;
use std::sync::LazyLock;

/// Dotted or underscored version run, e.g. `10_15_7` or `123.0.0.21`.
static VERSION_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\d\.]+").expect("static version pattern"));

/// First version-looking run in `s`, with `_` normalised to `.`.
pub(crate) fn find_version(s: &str) -> Option<String> {
    let m = VERSION_RUN.find(s).ok().flatten()?;
    Some(m.as_str().replace('_', "."))
}

/// Version of the first token whose key satisfies `marker`, looked up in its
/// value first and then in the key text itself (`CPU OS 10_3_2 like Mac OS X`).
pub(crate) fn find_containing_version(
    tokens: &Tokens,
    marker: impl Fn(&str) -> bool,
) -> Option<String> {
    tokens
        .iter()
        .filter(|t| marker(&t.key))
        .find_map(|t| find_version(&t.value).or_else(|| find_version(&t.key)))
}

/// Apple platforms embed the OS version in a key mentioning `OS`.
pub(crate) fn find_apple_os_version(tokens: &Tokens) -> String {
    find_containing_version(tokens, |k| k.contains("OS")).unwrap_or_default()
}

pub(crate) fn find_instagram_version(tokens: &Tokens) -> String {
    find_containing_version(tokens, |k| k.starts_with("Instagram")).unwrap_or_default()
}

/// Engine, platform and generic keys that never name the client itself.
fn is_generic_key(key: &str) -> bool {
    matches!(
        key,
        "Chrome"
            | "Firefox"
            | "Safari"
            | "Version"
            | "Mobile"
            | "Mobile Safari"
            | "Mozilla"
            | "AppleWebKit"
            | "Windows NT"
            | "Windows Phone OS"
            | "Android"
            | "Macintosh"
            | "Linux"
            | "GSA"
            | "CrOS"
            | "OpenHarmony"
            | "Tablet"
    )
}

/// Guess the client name from whatever tokens are left.
///
/// The first pass only accepts tokens carrying a value (`Name/1.2`); unless
/// `versioned_only` is set a second pass accepts any remaining token.
/// Generic keys and keys starting with a digit are skipped.
pub(crate) fn find_best_match(tokens: &Tokens, versioned_only: bool) -> Option<&str> {
    let candidates = || {
        tokens.iter().filter(|t| {
            !is_generic_key(&t.key) && !t.key.starts_with(|c: char| c.is_ascii_digit())
        })
    };

    let best = candidates()
        .find(|t| !t.value.is_empty())
        .or_else(|| (!versioned_only).then(|| candidates().next()).flatten())
        .map(|t| t.key.as_str());

    tracing::trace!(?best, versioned_only, "best matching name");
    best
}

/// Keys that may follow the Android token but are not device models.
fn is_non_device_key(key: &str) -> bool {
    matches!(
        key,
        "Chrome"
            | "Firefox"
            | "Safari"
            | "Opera Mini"
            | "Presto"
            | "Version"
            | "Mobile"
            | "Mobile Safari"
            | "Mozilla"
            | "AppleWebKit"
            | "Windows NT"
            | "Windows Phone OS"
            | "Android"
            | "Macintosh"
            | "Linux"
            | "CrOS"
    )
}

/// `en`, `de`, `en-us`, `pt-br`, ...
fn looks_like_locale(key: &str) -> bool {
    key.len() == 2 || (key.len() == 5 && key.as_bytes()[2] == b'-')
}

/// Device model from the token right after the Android token at `os_index`.
///
/// Only that one token is inspected.  A model token is removed from the
/// sequence so the client rules cannot mistake it for a client name; a token
/// mentioning `tablet` is relabelled `Tablet` instead, keeping the marker for
/// the tablet checks further down.
pub(crate) fn take_android_device(tokens: &mut Tokens, os_index: usize) -> String {
    let index = os_index + 1;
    let Some(candidate) = tokens.as_slice().get(index) else {
        return String::new();
    };

    let key = candidate.key.as_str();
    if looks_like_locale(key) || is_non_device_key(key) {
        return String::new();
    }

    let device = key.strip_suffix("Build").unwrap_or(key).trim().to_owned();
    let is_tablet = contains_tablet(key);
    if is_tablet {
        tokens.relabel(index, "Tablet");
    } else {
        tokens.splice_out(index);
    }
    device
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, &str)]) -> Tokens {
        let mut t = Tokens::default();
        for (k, v) in pairs {
            t.push(k, v);
        }
        t
    }

    #[test]
    fn find_version_normalises_underscores() {
        assert_eq!(find_version("Intel Mac OS X 10_15_7").as_deref(), Some("10.15.7"));
        assert_eq!(find_version("Instagram 123.0.0.21.114").as_deref(), Some("123.0.0.21.114"));
        assert_eq!(find_version("Macintosh"), None);
    }

    #[test]
    fn apple_os_version_from_key() {
        let t = tokens(&[
            ("5.0", ""),
            ("iPad", ""),
            ("CPU OS 10_3_2 like Mac OS X", ""),
            ("AppleWebKit", "603.2.4"),
        ]);
        assert_eq!(find_apple_os_version(&t), "10.3.2");
    }

    #[test]
    fn apple_os_version_prefers_value() {
        let t = tokens(&[("FBSV OS", "14.4.2")]);
        assert_eq!(find_apple_os_version(&t), "14.4.2");
    }

    #[test]
    fn apple_os_version_missing() {
        let t = tokens(&[("Macintosh", "")]);
        assert_eq!(find_apple_os_version(&t), "");
    }

    #[test]
    fn instagram_version_from_key() {
        let t = tokens(&[("Mobile", "15E148"), ("Instagram 123.0.0.21.114", "")]);
        assert_eq!(find_instagram_version(&t), "123.0.0.21.114");
    }

    #[test]
    fn best_match_prefers_versioned_tokens() {
        let t = tokens(&[
            ("Macintosh", ""),
            ("Intel Mac OS X 10_11_4", ""),
            ("AppleWebKit", "537.36"),
            ("QtWebEngine", "5.6.0"),
            ("Chrome", "45.0"),
        ]);
        assert_eq!(find_best_match(&t, true), Some("QtWebEngine"));
        assert_eq!(find_best_match(&t, false), Some("QtWebEngine"));
    }

    #[test]
    fn best_match_second_pass_takes_any_token() {
        let t = tokens(&[("5.0", ""), ("BUbiNG", "")]);
        assert_eq!(find_best_match(&t, true), None);
        assert_eq!(find_best_match(&t, false), Some("BUbiNG"));
    }

    #[test]
    fn best_match_skips_generic_and_numeric_keys() {
        let t = tokens(&[
            ("5.0", "x"),
            ("Windows NT", "6.1"),
            ("Chrome", "59.0"),
            ("Safari", "537.36"),
        ]);
        assert_eq!(find_best_match(&t, false), None);
    }

    #[test]
    fn android_device_is_taken_and_removed() {
        let mut t = tokens(&[
            ("Linux", ""),
            ("Android", "4.3"),
            ("GT-I9300 Build", "JSS15J"),
            ("AppleWebKit", "537.36"),
        ]);
        assert_eq!(take_android_device(&mut t, 1), "GT-I9300");
        assert!(!t.starts_with("GT-"));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn android_device_skips_locale_and_generic_tokens() {
        let mut t = tokens(&[("Android", "4.3"), ("de", ""), ("SM-G900F", "")]);
        assert_eq!(take_android_device(&mut t, 0), "");
        assert_eq!(t.len(), 3);

        let mut t = tokens(&[("Android", "4.3"), ("pt-br", "")]);
        assert_eq!(take_android_device(&mut t, 0), "");

        let mut t = tokens(&[("Android", ""), ("Opera Mini", "28.0")]);
        assert_eq!(take_android_device(&mut t, 0), "");
        assert!(t.exists("Opera Mini"));
    }

    #[test]
    fn android_tablet_token_is_relabelled() {
        let mut t = tokens(&[("Android", "4.4"), ("Nexus Tablet Build", "KOT49H")]);
        assert_eq!(take_android_device(&mut t, 0), "Nexus Tablet");
        assert!(t.exists("Tablet"));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn android_device_at_end_of_sequence() {
        let mut t = tokens(&[("Android", "10")]);
        assert_eq!(take_android_device(&mut t, 0), "");
    }
}
