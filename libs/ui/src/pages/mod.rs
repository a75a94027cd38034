use crate::icons::IconSet;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub mod boot;
pub mod page;

pub use boot::BootPage;
pub use page::Page;

/// Height of the status strip at the top of every page
pub const HEADER_HEIGHT: i32 = 24;

/// Horizontal distance of the clock and icons from the display edges
pub const HEADER_MARGIN: i32 = 4;

/// Distance of the clock baseline above the bottom of the header
pub const HEADER_BASELINE_INSET: i32 = 3;

/// The icon cluster sits this much lower than the clock
pub const HEADER_ICON_DROP: i32 = 2;

/// Day.month hour:minute
pub const HEADER_TIME_FORMAT: &str = "%d.%m %H:%M";

/// Geometry of the page header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderLayout {
    pub height: i32,
    pub margin: i32,
    pub baseline_inset: i32,
    pub icon_drop: i32,
    pub time_format: String,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            height: HEADER_HEIGHT,
            margin: HEADER_MARGIN,
            baseline_inset: HEADER_BASELINE_INSET,
            icon_drop: HEADER_ICON_DROP,
            time_format: HEADER_TIME_FORMAT.to_string(),
        }
    }
}

impl HeaderLayout {
    /// Baseline shared by the clock and (shifted by `icon_drop`) the icons
    #[must_use]
    pub fn baseline(&self) -> i32 {
        self.height - self.baseline_inset
    }

    /// Row of the separator under the header
    #[must_use]
    pub fn separator_y(&self) -> i32 {
        self.height - 1
    }
}

/// Device state shown in the header for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderStatus {
    pub now: NaiveDateTime,
    pub wifi_percent: f32,
    pub api_connected: bool,
}

/// Fonts and icons used by the page layouts.
pub struct PageStyle<'f, F: ?Sized> {
    pub header_font: &'f F,
    pub glyph_font: &'f F,
    pub icons: &'f IconSet,
}

impl<F: ?Sized> Clone for PageStyle<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for PageStyle<'_, F> {}
