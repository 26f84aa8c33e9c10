//! Operating-system signatures, highest priority first.

use crate::heuristics::{find_apple_os_version, take_android_device};
use crate::helpers::contains_tablet;
use crate::names::os;
use crate::rules::{present, Outcome, Rule, RuleTable};
use crate::tokens::Tokens;
use crate::types::Classification;

fn android(t: &mut Tokens, c: &mut Classification) -> Outcome {
    c.os = os::ANDROID.into();
    c.tablet = contains_tablet(&c.raw);
    if let Some((index, version)) = t.get_indexed("Android") {
        c.os_version = version.to_owned();
        c.device = take_android_device(t, index);
    }
    Outcome::Done
}

fn iphone(t: &mut Tokens, c: &mut Classification) -> Outcome {
    c.os = os::IOS.into();
    c.os_version = find_apple_os_version(t);
    c.device = "iPhone".into();
    c.mobile = true;
    Outcome::Done
}

fn ipad(t: &mut Tokens, c: &mut Classification) -> Outcome {
    c.os = os::IOS.into();
    c.os_version = find_apple_os_version(t);
    c.device = "iPad".into();
    c.tablet = true;
    Outcome::Done
}

fn macintosh(t: &mut Tokens, c: &mut Classification) -> Outcome {
    c.os = os::MACOS.into();
    c.os_version = find_apple_os_version(t);
    c.desktop = true;
    Outcome::Done
}

/// OS whose version sits in the value of its own marker token.
fn versioned(
    t: &Tokens,
    c: &mut Classification,
    key: &str,
    name: &str,
    mobile: bool,
) -> Outcome {
    c.os = name.into();
    c.os_version = t.get(key).to_owned();
    if mobile {
        c.mobile = true;
    } else {
        c.desktop = true;
    }
    Outcome::Done
}

pub(crate) static OS_RULES: RuleTable = RuleTable {
    kind: "os",
    rules: &[
        Rule {
            name: "android",
            matches: present!("Android"),
            apply: android,
        },
        Rule {
            name: "iphone",
            matches: present!("iPhone"),
            apply: iphone,
        },
        Rule {
            name: "ipad",
            matches: present!("iPad"),
            apply: ipad,
        },
        Rule {
            name: "windows",
            matches: present!("Windows NT"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                versioned(t, c, "Windows NT", os::WINDOWS, false)
            },
        },
        Rule {
            name: "windows-phone",
            matches: present!("Windows Phone OS"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                versioned(t, c, "Windows Phone OS", os::WINDOWS_PHONE, true)
            },
        },
        Rule {
            name: "macos",
            matches: present!("Macintosh"),
            apply: macintosh,
        },
        Rule {
            name: "linux",
            matches: present!("Linux"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                versioned(t, c, "Linux", os::LINUX, false)
            },
        },
        Rule {
            name: "freebsd",
            matches: present!("FreeBSD"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                versioned(t, c, "FreeBSD", os::FREEBSD, false)
            },
        },
        Rule {
            name: "chromeos",
            matches: present!("CrOS"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                versioned(t, c, "CrOS", os::CHROMEOS, false)
            },
        },
        Rule {
            name: "blackberry",
            matches: present!("BlackBerry"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                versioned(t, c, "BlackBerry", os::BLACKBERRY, true)
            },
        },
        Rule {
            name: "harmonyos",
            matches: present!("OpenHarmony"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                versioned(t, c, "OpenHarmony", os::HARMONYOS, true)
            },
        },
    ],
};
