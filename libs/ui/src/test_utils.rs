//! Test doubles for layout code
//!
//! [`RecordingSurface`] is a root surface that remembers every call it
//! receives instead of drawing, and [`FixedFont`] measures text with fixed
//! per-character metrics while counting how often it was asked.

use crate::surface::{DrawingSurface, Font, TextAlign, TextMetrics};
use chrono::NaiveDateTime;
use core::cell::Cell;
use core::convert::Infallible;

/// A drawing call as it reached the root surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Print {
        x: i32,
        y: i32,
        align: TextAlign,
        text: String,
    },
    Image {
        x: i32,
        y: i32,
        name: String,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    Rectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        filled: bool,
    },
    Strftime {
        x: i32,
        y: i32,
        align: TextAlign,
        format: String,
        time: NaiveDateTime,
    },
    StartClipping {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    EndClipping,
}

/// Root surface that records calls in order.
pub struct RecordingSurface {
    width: i32,
    height: i32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// All text that reached the surface through `print`, in order.
    #[must_use]
    pub fn printed(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Print { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    type Color = bool;
    type Font = FixedFont;
    type Image = str;
    type Error = Infallible;

    fn foreground(&self) -> bool {
        true
    }

    fn print(
        &mut self,
        x: i32,
        y: i32,
        _font: &FixedFont,
        _color: bool,
        align: TextAlign,
        text: &str,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Print {
            x,
            y,
            align,
            text: text.to_string(),
        });
        Ok(())
    }

    fn image(&mut self, x: i32, y: i32, image: &str) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Image {
            x,
            y,
            name: image.to_string(),
        });
        Ok(())
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, _color: bool) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
        Ok(())
    }

    fn rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        _color: bool,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Rectangle {
            x,
            y,
            width,
            height,
            filled: false,
        });
        Ok(())
    }

    fn filled_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        _color: bool,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Rectangle {
            x,
            y,
            width,
            height,
            filled: true,
        });
        Ok(())
    }

    fn strftime(
        &mut self,
        x: i32,
        y: i32,
        _font: &FixedFont,
        _color: bool,
        align: TextAlign,
        format: &str,
        time: &NaiveDateTime,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Strftime {
            x,
            y,
            align,
            format: format.to_string(),
            time: *time,
        });
        Ok(())
    }

    fn start_clipping(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), Infallible> {
        self.calls.push(DrawCall::StartClipping {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn end_clipping(&mut self) -> Result<(), Infallible> {
        self.calls.push(DrawCall::EndClipping);
        Ok(())
    }

    fn get_width(&self) -> i32 {
        self.width
    }

    fn get_height(&self) -> i32 {
        self.height
    }
}

/// Font where every character advances by the same amount.
pub struct FixedFont {
    pub advance: i32,
    pub ascent: i32,
    pub descent: i32,
    pub cap_height: i32,
    measure_calls: Cell<usize>,
}

impl FixedFont {
    #[must_use]
    pub fn new(advance: i32, ascent: i32, descent: i32, cap_height: i32) -> Self {
        Self {
            advance,
            ascent,
            descent,
            cap_height,
            measure_calls: Cell::new(0),
        }
    }

    /// Number of `measure` calls so far.
    #[must_use]
    pub fn measure_calls(&self) -> usize {
        self.measure_calls.get()
    }
}

impl Default for FixedFont {
    fn default() -> Self {
        Self::new(6, 10, 3, 7)
    }
}

impl Font for FixedFont {
    fn measure(&self, text: &str) -> TextMetrics {
        self.measure_calls.set(self.measure_calls.get() + 1);
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        TextMetrics {
            width: chars.saturating_mul(self.advance),
            height: self.ascent + self.descent,
            baseline: self.ascent,
            x_offset: 0,
        }
    }

    fn cap_height(&self) -> i32 {
        self.cap_height
    }
}
