//! The drawing capability shared by root surfaces and containers
//!
//! Every layer of a page (the physical display, a [`Container`](crate::Container),
//! a [`Page`](crate::Page)) implements [`DrawingSurface`], so layouts nest
//! without knowing what sits underneath them.

use chrono::NaiveDateTime;
use core::fmt;
use core::ops::{Deref, DerefMut};

/// Result of a single font measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: i32,
    pub height: i32,
    pub baseline: i32,
    pub x_offset: i32,
}

/// A font that can report the extent of rendered text.
pub trait Font {
    /// Measure `text` in one pass.
    fn measure(&self, text: &str) -> TextMetrics;

    /// Height of a capital letter above the baseline.
    fn cap_height(&self) -> i32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

/// Which point of the rendered text sits at the `(x, y)` anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextAlign {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl TextAlign {
    pub const TOP_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Top);
    pub const TOP_CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Top);
    pub const TOP_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Top);
    pub const CENTER_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Center);
    pub const CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Center);
    pub const CENTER_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Center);
    pub const BASELINE_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Baseline);
    pub const BASELINE_CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Baseline);
    pub const BASELINE_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Baseline);
    pub const BOTTOM_LEFT: Self = Self::new(HorizontalAlign::Left, VerticalAlign::Bottom);
    pub const BOTTOM_CENTER: Self = Self::new(HorizontalAlign::Center, VerticalAlign::Bottom);
    pub const BOTTOM_RIGHT: Self = Self::new(HorizontalAlign::Right, VerticalAlign::Bottom);

    #[must_use]
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Anything that can be drawn on during a render pass.
///
/// Coordinates are in the surface's own space. Implementations that proxy to
/// a parent translate them before forwarding; root implementations draw.
pub trait DrawingSurface {
    type Color: Copy;
    type Font: Font + ?Sized;
    type Image: ?Sized;
    type Error;

    /// Pen colour used when a layout does not pick one explicitly.
    fn foreground(&self) -> Self::Color;

    fn print(
        &mut self,
        x: i32,
        y: i32,
        font: &Self::Font,
        color: Self::Color,
        align: TextAlign,
        text: &str,
    ) -> Result<(), Self::Error>;

    /// Format `args` and draw the result like [`print`](Self::print).
    fn printf(
        &mut self,
        x: i32,
        y: i32,
        font: &Self::Font,
        color: Self::Color,
        align: TextAlign,
        args: fmt::Arguments<'_>,
    ) -> Result<(), Self::Error> {
        let text = args.to_string();
        self.print(x, y, font, color, align, &text)
    }

    fn image(&mut self, x: i32, y: i32, image: &Self::Image) -> Result<(), Self::Error>;

    fn line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    fn rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    fn filled_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Self::Color,
    ) -> Result<(), Self::Error>;

    /// Format `time` with a chrono pattern and draw it.
    #[allow(clippy::too_many_arguments)]
    fn strftime(
        &mut self,
        x: i32,
        y: i32,
        font: &Self::Font,
        color: Self::Color,
        align: TextAlign,
        format: &str,
        time: &NaiveDateTime,
    ) -> Result<(), Self::Error>;

    /// Restrict drawing to a rectangle until the matching
    /// [`end_clipping`](Self::end_clipping).
    ///
    /// Calls must be nested correctly by the caller. Prefer [`ClipGuard`].
    fn start_clipping(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), Self::Error>;

    fn end_clipping(&mut self) -> Result<(), Self::Error>;

    fn get_width(&self) -> i32;

    fn get_height(&self) -> i32;
}

/// Clip region that is released when dropped.
///
/// Derefs to the wrapped surface so drawing continues through the guard.
pub struct ClipGuard<'s, S: DrawingSurface + ?Sized> {
    surface: &'s mut S,
}

impl<'s, S: DrawingSurface + ?Sized> ClipGuard<'s, S> {
    pub fn new(
        surface: &'s mut S,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<Self, S::Error> {
        surface.start_clipping(x, y, width, height)?;
        Ok(Self { surface })
    }
}

impl<S: DrawingSurface + ?Sized> Deref for ClipGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> DerefMut for ClipGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: DrawingSurface + ?Sized> Drop for ClipGuard<'_, S> {
    fn drop(&mut self) {
        if self.surface.end_clipping().is_err() {
            log::warn!("Failed to release clip region");
        }
    }
}
