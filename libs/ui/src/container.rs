//! Offset-translating proxy over a parent surface

use crate::surface::{DrawingSurface, Font, TextAlign, TextMetrics};
use chrono::NaiveDateTime;
use core::fmt;

/// A rectangle in the coordinate space of the immediate parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A sub-region of a parent surface with its own local origin.
///
/// Every drawing call is shifted by the region offset and forwarded to the
/// parent. Sizes are passed through untouched: nesting moves things, it
/// never scales them.
pub struct Container<'a, P: DrawingSurface + ?Sized> {
    parent: &'a mut P,
    region: Region,
}

impl<'a, P: DrawingSurface + ?Sized> Container<'a, P> {
    pub fn new(parent: &'a mut P, x: i32, y: i32, width: i32, height: i32) -> Self {
        log::debug!(target: "layout", "Container: ({width}x{height})@{x},{y}");
        Self {
            parent,
            region: Region::new(x, y, width, height),
        }
    }

    pub fn with_region(parent: &'a mut P, region: Region) -> Self {
        Self::new(parent, region.x, region.y, region.width, region.height)
    }

    pub fn get_parent(&mut self) -> &mut P {
        self.parent
    }

    /// Local point in parent coordinates, clamped to the `i32` range.
    fn shift(&self, x: i32, y: i32) -> (i32, i32) {
        (
            self.region.x.saturating_add(x),
            self.region.y.saturating_add(y),
        )
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Offset within the immediate parent, not the root.
    #[must_use]
    pub fn get_x(&self) -> i32 {
        self.region.x
    }

    #[must_use]
    pub fn get_y(&self) -> i32 {
        self.region.y
    }

    // Measurement depends only on the font
    #[allow(clippy::unused_self)]
    pub fn get_text_width(&self, font: &P::Font, text: &str) -> i32 {
        font.measure(text).width
    }

    #[allow(clippy::unused_self)]
    pub fn get_cap_height(&self, font: &P::Font) -> i32 {
        font.cap_height()
    }

    /// Every metric of `text` from a single measurement.
    #[allow(clippy::unused_self)]
    pub fn get_text_metrics(&self, font: &P::Font, text: &str) -> TextMetrics {
        font.measure(text)
    }
}

impl<P: DrawingSurface + ?Sized> DrawingSurface for Container<'_, P> {
    type Color = P::Color;
    type Font = P::Font;
    type Image = P::Image;
    type Error = P::Error;

    fn foreground(&self) -> P::Color {
        self.parent.foreground()
    }

    fn print(
        &mut self,
        x: i32,
        y: i32,
        font: &P::Font,
        color: P::Color,
        align: TextAlign,
        text: &str,
    ) -> Result<(), P::Error> {
        let (x, y) = self.shift(x, y);
        self.parent.print(x, y, font, color, align, text)
    }

    fn printf(
        &mut self,
        x: i32,
        y: i32,
        font: &P::Font,
        color: P::Color,
        align: TextAlign,
        args: fmt::Arguments<'_>,
    ) -> Result<(), P::Error> {
        let (x, y) = self.shift(x, y);
        self.parent.printf(x, y, font, color, align, args)
    }

    fn image(&mut self, x: i32, y: i32, image: &P::Image) -> Result<(), P::Error> {
        let (x, y) = self.shift(x, y);
        self.parent.image(x, y, image)
    }

    fn line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: P::Color,
    ) -> Result<(), P::Error> {
        let (x1, y1) = self.shift(x1, y1);
        let (x2, y2) = self.shift(x2, y2);
        self.parent.line(x1, y1, x2, y2, color)
    }

    fn rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: P::Color,
    ) -> Result<(), P::Error> {
        let (x, y) = self.shift(x, y);
        self.parent.rectangle(x, y, width, height, color)
    }

    fn filled_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: P::Color,
    ) -> Result<(), P::Error> {
        let (x, y) = self.shift(x, y);
        self.parent.filled_rectangle(x, y, width, height, color)
    }

    fn strftime(
        &mut self,
        x: i32,
        y: i32,
        font: &P::Font,
        color: P::Color,
        align: TextAlign,
        format: &str,
        time: &NaiveDateTime,
    ) -> Result<(), P::Error> {
        let (x, y) = self.shift(x, y);
        self.parent.strftime(x, y, font, color, align, format, time)
    }

    fn start_clipping(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), P::Error> {
        let (x, y) = self.shift(x, y);
        self.parent.start_clipping(x, y, width, height)
    }

    fn end_clipping(&mut self) -> Result<(), P::Error> {
        self.parent.end_clipping()
    }

    fn get_width(&self) -> i32 {
        self.region.width
    }

    fn get_height(&self) -> i32 {
        self.region.height
    }
}

/// Implements [`DrawingSurface`] for a layout type by forwarding every call
/// to one of its fields, which must itself be a surface over the same parent.
macro_rules! delegate_surface {
    ($ty:ident, $($field:ident).+) => {
        impl<P: $crate::surface::DrawingSurface + ?Sized> $crate::surface::DrawingSurface
            for $ty<'_, P>
        {
            type Color = P::Color;
            type Font = P::Font;
            type Image = P::Image;
            type Error = P::Error;

            fn foreground(&self) -> P::Color {
                self.$($field).+.foreground()
            }

            fn print(
                &mut self,
                x: i32,
                y: i32,
                font: &P::Font,
                color: P::Color,
                align: $crate::surface::TextAlign,
                text: &str,
            ) -> Result<(), P::Error> {
                self.$($field).+.print(x, y, font, color, align, text)
            }

            fn printf(
                &mut self,
                x: i32,
                y: i32,
                font: &P::Font,
                color: P::Color,
                align: $crate::surface::TextAlign,
                args: ::core::fmt::Arguments<'_>,
            ) -> Result<(), P::Error> {
                self.$($field).+.printf(x, y, font, color, align, args)
            }

            fn image(&mut self, x: i32, y: i32, image: &P::Image) -> Result<(), P::Error> {
                self.$($field).+.image(x, y, image)
            }

            fn line(
                &mut self,
                x1: i32,
                y1: i32,
                x2: i32,
                y2: i32,
                color: P::Color,
            ) -> Result<(), P::Error> {
                self.$($field).+.line(x1, y1, x2, y2, color)
            }

            fn rectangle(
                &mut self,
                x: i32,
                y: i32,
                width: i32,
                height: i32,
                color: P::Color,
            ) -> Result<(), P::Error> {
                self.$($field).+.rectangle(x, y, width, height, color)
            }

            fn filled_rectangle(
                &mut self,
                x: i32,
                y: i32,
                width: i32,
                height: i32,
                color: P::Color,
            ) -> Result<(), P::Error> {
                self.$($field).+.filled_rectangle(x, y, width, height, color)
            }

            fn strftime(
                &mut self,
                x: i32,
                y: i32,
                font: &P::Font,
                color: P::Color,
                align: $crate::surface::TextAlign,
                format: &str,
                time: &::chrono::NaiveDateTime,
            ) -> Result<(), P::Error> {
                self.$($field).+.strftime(x, y, font, color, align, format, time)
            }

            fn start_clipping(
                &mut self,
                x: i32,
                y: i32,
                width: i32,
                height: i32,
            ) -> Result<(), P::Error> {
                self.$($field).+.start_clipping(x, y, width, height)
            }

            fn end_clipping(&mut self) -> Result<(), P::Error> {
                self.$($field).+.end_clipping()
            }

            fn get_width(&self) -> i32 {
                self.$($field).+.get_width()
            }

            fn get_height(&self) -> i32 {
                self.$($field).+.get_height()
            }
        }
    };
}

pub(crate) use delegate_surface;
