//! Browser, app and bot signatures, highest priority first.

use crate::heuristics::{find_best_match, find_instagram_version};
use crate::helpers::contains_bot;
use crate::names::client;
use crate::rules::{present, valued, Outcome, Rule, RuleTable};
use crate::tokens::Tokens;
use crate::types::Classification;

/// Name the client and take its version from the value of `key`.
fn named(t: &Tokens, c: &mut Classification, key: &str, name: &str) {
    c.name = name.into();
    c.version = t.get(key).to_owned();
}

/// Client identified by a versioned `key` token; mobile when the string
/// carries a `Mobile` marker.
macro_rules! marked {
    ($rule:literal, $key:literal, $name:expr) => {
        marked!($rule, $key, $name, bot = false)
    };
    ($rule:literal, $key:literal, $name:expr, bot = $bot:literal) => {
        Rule {
            name: $rule,
            matches: valued!($key),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, $key, $name);
                c.mobile = t.has_mobile_marker();
                c.bot |= $bot;
                Outcome::Done
            },
        }
    };
}

fn crawler(t: &Tokens, c: &mut Classification, key: &str, name: &str) {
    named(t, c, key, name);
    c.bot = true;
    c.mobile = t.has_mobile_marker();
}

fn google_prober(t: &mut Tokens, c: &mut Classification) -> Outcome {
    if let Some(name) = find_best_match(t, false) {
        c.name = name.to_owned();
    }
    c.bot = true;
    Outcome::Done
}

fn applebot(t: &mut Tokens, c: &mut Classification) -> Outcome {
    crawler(t, c, "Applebot", client::APPLEBOT);
    // the desktop Safari it imitates is not a real platform
    c.os.clear();
    Outcome::Done
}

fn firefox(t: &mut Tokens, c: &mut Classification) -> Outcome {
    named(t, c, "Firefox", client::FIREFOX);
    c.mobile = t.exists("Mobile");
    c.tablet |= t.exists("Tablet");
    Outcome::Done
}

/// Ad-verification crawlers: mobile follows the detected platform.
fn ad_bot(c: &mut Classification, name: &str) -> Outcome {
    c.name = name.into();
    c.bot = true;
    c.mobile = c.is_android() || c.is_ios();
    Outcome::Done
}

fn is_miui(t: &Tokens, _: &Classification) -> bool {
    t.get("XiaoMi").starts_with("MiuiBrowser")
}

fn miui(t: &mut Tokens, c: &mut Classification) -> Outcome {
    let value = t.get("XiaoMi");
    c.name = client::MIUI_BROWSER.into();
    c.version = value
        .strip_prefix("MiuiBrowser/")
        .unwrap_or(value)
        .to_owned();
    c.mobile = true;
    Outcome::Done
}

fn instagram(t: &mut Tokens, c: &mut Classification) -> Outcome {
    c.name = client::INSTAGRAM_APP.into();
    c.version = find_instagram_version(t);
    Outcome::Done
}

/// Chrome and Safari together are mostly some other product riding on
/// Chromium (`QtWebEngine/5.6.0 Chrome/... Safari/...`); name it after the
/// first versioned token that is not generic, or leave it to the Chrome rule.
fn chromium_based(t: &mut Tokens, c: &mut Classification) -> Outcome {
    match find_best_match(t, true) {
        Some(name) => {
            c.name = name.to_owned();
            c.version = t.get(name).to_owned();
            Outcome::Done
        }
        None => Outcome::Continue,
    }
}

fn safari(t: &mut Tokens, c: &mut Classification) -> Outcome {
    c.name = client::SAFARI.into();
    c.version = t
        .get_non_empty("Version")
        .unwrap_or_else(|| t.get("Safari"))
        .to_owned();
    c.mobile = t.has_mobile_marker();
    Outcome::Done
}

/// Nothing known matched: stock Android browser, or the best guess from the
/// remaining tokens, or the raw string itself.
fn fallback(t: &mut Tokens, c: &mut Classification) -> Outcome {
    if let Some(version) = t.get_non_empty("Version").filter(|_| c.is_android()) {
        c.name = client::ANDROID_BROWSER.into();
        c.version = version.to_owned();
        c.mobile = true;
        return Outcome::Done;
    }

    match find_best_match(t, false) {
        Some(name) => {
            c.name = name.to_owned();
            c.version = t.get(name).to_owned();
        }
        None => c.name = c.raw.clone(),
    }
    c.bot = contains_bot(&c.name);
    if !c.mobile {
        c.mobile = t.has_mobile_marker();
    }
    Outcome::Done
}

pub(crate) static CLIENT_RULES: RuleTable = RuleTable {
    kind: "client",
    rules: &[
        Rule {
            name: "googlebot",
            matches: present!("Googlebot"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                crawler(t, c, "Googlebot", client::GOOGLEBOT);
                Outcome::Done
            },
        },
        Rule {
            name: "google-prober",
            matches: |t: &Tokens, _: &Classification| {
                t.exists_any(&["GoogleProber", "GoogleProducer"])
            },
            apply: google_prober,
        },
        Rule {
            name: "applebot",
            matches: present!("Applebot"),
            apply: applebot,
        },
        Rule {
            name: "opera-mini",
            matches: valued!("Opera Mini"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, "Opera Mini", client::OPERA_MINI);
                c.mobile = true;
                Outcome::Done
            },
        },
        marked!("opera", "OPR", client::OPERA),
        marked!("opera-touch", "OPT", client::OPERA_TOUCH),
        marked!("opera-ios", "OPiOS", client::OPERA),
        marked!("chrome-ios", "CriOS", client::CHROME),
        marked!("firefox-ios", "FxiOS", client::FIREFOX),
        Rule {
            name: "firefox",
            matches: valued!("Firefox"),
            apply: firefox,
        },
        Rule {
            name: "vivaldi",
            matches: valued!("Vivaldi"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, "Vivaldi", client::VIVALDI);
                Outcome::Done
            },
        },
        Rule {
            name: "internet-explorer",
            matches: present!("MSIE"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, "MSIE", client::INTERNET_EXPLORER);
                Outcome::Done
            },
        },
        marked!("edge-ios", "EdgiOS", client::EDGE),
        marked!("edge-legacy", "Edge", client::EDGE),
        marked!("edge", "Edg", client::EDGE),
        marked!("edge-android", "EdgA", client::EDGE),
        marked!("bingbot", "bingbot", client::BINGBOT, bot = true),
        marked!("yandexbot", "YandexBot", client::YANDEXBOT, bot = true),
        marked!("samsung-browser", "SamsungBrowser", client::SAMSUNG_BROWSER),
        marked!(
            "headless-chrome",
            "HeadlessChrome",
            client::HEADLESS_CHROME,
            bot = true
        ),
        Rule {
            name: "google-ads-bot",
            matches: |t: &Tokens, _: &Classification| {
                t.exists_any(&["AdsBot-Google-Mobile", "Mediapartners-Google", "AdsBot-Google"])
            },
            apply: |_: &mut Tokens, c: &mut Classification| ad_bot(c, client::GOOGLE_ADS_BOT),
        },
        Rule {
            name: "yahoo-ad-monitoring",
            matches: present!("Yahoo Ad monitoring"),
            apply: |_: &mut Tokens, c: &mut Classification| {
                ad_bot(c, client::YAHOO_AD_MONITORING)
            },
        },
        Rule {
            name: "miui-browser",
            matches: is_miui,
            apply: miui,
        },
        Rule {
            name: "facebook-app",
            matches: present!("FBAN"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, "FBAN", client::FACEBOOK_APP);
                Outcome::Done
            },
        },
        Rule {
            name: "facebook-iab",
            matches: present!("FB_IAB"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, "FBAV", client::FACEBOOK_APP);
                Outcome::Done
            },
        },
        Rule {
            name: "instagram-app",
            matches: |t: &Tokens, _: &Classification| t.starts_with("Instagram"),
            apply: instagram,
        },
        Rule {
            name: "tiktok-app",
            matches: present!("BytedanceWebview"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, "app_version", client::TIKTOK_APP);
                Outcome::Done
            },
        },
        marked!("huawei-browser", "HuaweiBrowser", client::HUAWEI_BROWSER),
        Rule {
            name: "blackberry",
            matches: present!("BlackBerry"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, "Version", client::BLACKBERRY);
                Outcome::Done
            },
        },
        Rule {
            name: "netfront",
            matches: present!("NetFront"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, "NetFront", client::NETFRONT);
                c.mobile = true;
                Outcome::Done
            },
        },
        Rule {
            name: "chromium-based",
            matches: |t: &Tokens, _: &Classification| t.exists("Chrome") && t.exists("Safari"),
            apply: chromium_based,
        },
        Rule {
            name: "chrome",
            matches: present!("Chrome"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, "Chrome", client::CHROME);
                c.mobile = t.has_mobile_marker();
                Outcome::Done
            },
        },
        Rule {
            name: "brave-chrome",
            matches: present!("Brave Chrome"),
            apply: |t: &mut Tokens, c: &mut Classification| {
                named(t, c, "Brave Chrome", client::CHROME);
                c.mobile = t.has_mobile_marker();
                Outcome::Done
            },
        },
        Rule {
            name: "safari",
            matches: present!("Safari"),
            apply: safari,
        },
        Rule {
            name: "fallback",
            matches: |_: &Tokens, _: &Classification| true,
            apply: fallback,
        },
    ],
};
