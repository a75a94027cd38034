//! Status icons shown in the page header
//!
//! Icon selection is pure; what each icon looks like is decided by an
//! [`IconSet`], because the glyphs live in whatever icon font the display
//! was built with.

use serde::{Deserialize, Serialize};

/// WiFi signal strength bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WifiIcon {
    NoSignal,
    Weakest,
    Weak,
    Medium,
    Strong,
    Full,
}

impl WifiIcon {
    /// Pick the icon for a signal strength in percent.
    ///
    /// Brackets are checked in ascending order, first match wins, so values
    /// below 0 show no signal and values above 100 show full signal. NaN
    /// matches no bracket and falls through to full signal.
    #[must_use]
    pub fn from_percent(percent: f32) -> Self {
        if percent <= 0.0 {
            Self::NoSignal
        } else if percent <= 20.0 {
            Self::Weakest
        } else if percent <= 40.0 {
            Self::Weak
        } else if percent <= 60.0 {
            Self::Medium
        } else if percent <= 80.0 {
            Self::Strong
        } else {
            Self::Full
        }
    }
}

/// Remote API connection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiIcon {
    Connected,
    Disconnected,
}

impl ApiIcon {
    #[must_use]
    pub fn from_connected(connected: bool) -> Self {
        if connected {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

/// Glyph strings for every header icon and the boot indicator.
///
/// The default set uses Material Design Icons codepoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSet {
    pub api_connected: String,
    pub api_disconnected: String,
    pub wifi_none: String,
    pub wifi_weakest: String,
    pub wifi_weak: String,
    pub wifi_medium: String,
    pub wifi_strong: String,
    pub wifi_full: String,
    pub boot: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            api_connected: "\u{F0003}".to_string(),
            api_disconnected: "\u{F1511}".to_string(),
            wifi_none: "\u{F092E}".to_string(),
            wifi_weakest: "\u{F092F}".to_string(),
            wifi_weak: "\u{F091F}".to_string(),
            wifi_medium: "\u{F0922}".to_string(),
            wifi_strong: "\u{F0925}".to_string(),
            wifi_full: "\u{F0928}".to_string(),
            boot: "\u{F07D0}".to_string(),
        }
    }
}

impl IconSet {
    /// Plain-text icons for fonts without an icon range.
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            api_connected: "@".to_string(),
            api_disconnected: "!".to_string(),
            wifi_none: "0".to_string(),
            wifi_weakest: "1".to_string(),
            wifi_weak: "2".to_string(),
            wifi_medium: "3".to_string(),
            wifi_strong: "4".to_string(),
            wifi_full: "5".to_string(),
            boot: "*".to_string(),
        }
    }

    #[must_use]
    pub fn wifi(&self, icon: WifiIcon) -> &str {
        match icon {
            WifiIcon::NoSignal => &self.wifi_none,
            WifiIcon::Weakest => &self.wifi_weakest,
            WifiIcon::Weak => &self.wifi_weak,
            WifiIcon::Medium => &self.wifi_medium,
            WifiIcon::Strong => &self.wifi_strong,
            WifiIcon::Full => &self.wifi_full,
        }
    }

    #[must_use]
    pub fn api(&self, icon: ApiIcon) -> &str {
        match icon {
            ApiIcon::Connected => &self.api_connected,
            ApiIcon::Disconnected => &self.api_disconnected,
        }
    }

    /// API glyph followed by WiFi glyph, drawn as one string.
    #[must_use]
    pub fn status_cluster(&self, api: ApiIcon, wifi: WifiIcon) -> String {
        format!("{}{}", self.api(api), self.wifi(wifi))
    }
}
