//! Names the classifier can emit in [`Classification::os`] and
//! [`Classification::name`], for comparison without string typos.
//!
//! [`Classification::os`]: crate::Classification::os
//! [`Classification::name`]: crate::Classification::name

pub mod os {
    pub const WINDOWS: &str = "Windows";
    pub const WINDOWS_PHONE: &str = "Windows Phone";
    pub const ANDROID: &str = "Android";
    pub const MACOS: &str = "macOS";
    pub const IOS: &str = "iOS";
    pub const LINUX: &str = "Linux";
    pub const FREEBSD: &str = "FreeBSD";
    pub const CHROMEOS: &str = "ChromeOS";
    pub const BLACKBERRY: &str = "BlackBerry";
    pub const HARMONYOS: &str = "HarmonyOS";
}

pub mod client {
    pub const OPERA: &str = "Opera";
    pub const OPERA_MINI: &str = "Opera Mini";
    pub const OPERA_TOUCH: &str = "Opera Touch";
    pub const CHROME: &str = "Chrome";
    pub const HEADLESS_CHROME: &str = "Headless Chrome";
    pub const FIREFOX: &str = "Firefox";
    pub const INTERNET_EXPLORER: &str = "Internet Explorer";
    pub const SAFARI: &str = "Safari";
    pub const EDGE: &str = "Edge";
    pub const VIVALDI: &str = "Vivaldi";
    pub const SAMSUNG_BROWSER: &str = "Samsung Browser";
    pub const MIUI_BROWSER: &str = "Miui Browser";
    pub const HUAWEI_BROWSER: &str = "Huawei Browser";
    pub const BLACKBERRY: &str = "BlackBerry";
    pub const NETFRONT: &str = "NetFront";
    pub const ANDROID_BROWSER: &str = "Android browser";

    pub const GOOGLE_ADS_BOT: &str = "Google Ads Bot";
    pub const GOOGLEBOT: &str = "Googlebot";
    pub const TWITTERBOT: &str = "Twitterbot";
    pub const FACEBOOK_EXTERNAL_HIT: &str = "facebookexternalhit";
    pub const APPLEBOT: &str = "Applebot";
    pub const BINGBOT: &str = "Bingbot";
    pub const YANDEXBOT: &str = "YandexBot";
    pub const YAHOO_AD_MONITORING: &str = "Yahoo Ad monitoring";

    pub const FACEBOOK_APP: &str = "Facebook App";
    pub const INSTAGRAM_APP: &str = "Instagram App";
    pub const TIKTOK_APP: &str = "TikTok App";
}
