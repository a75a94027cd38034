// Font definitions for pagekit layouts

use crate::surface::{Font, TextMetrics};
use embedded_graphics::prelude::Point;
use u8g2_fonts::{FontRenderer, types::VerticalPosition};

// Header clock and status cluster
pub use u8g2_fonts::fonts::u8g2_font_helvR10_tf as FONT_HEADER;

// Proportional font for page content
pub use u8g2_fonts::fonts::u8g2_font_helvR12_tf as FONT_PROPORTIONAL;

// Small font for dense content
pub use u8g2_fonts::fonts::u8g2_font_helvR08_tf as FONT_SMALL;

// Large glyph font for the boot indicator
pub use u8g2_fonts::fonts::u8g2_font_helvB24_tf as FONT_GLYPH;

impl Font for FontRenderer {
    fn measure(&self, text: &str) -> TextMetrics {
        let ascent = i32::from(self.get_ascent());
        let descent = i32::from(self.get_descent());

        let (width, x_offset) = self
            .get_rendered_dimensions(text, Point::zero(), VerticalPosition::Baseline)
            .ok()
            .map_or((0, 0), |d| {
                (d.advance.x, d.bounding_box.map_or(0, |b| b.top_left.x))
            });

        TextMetrics {
            width,
            height: ascent - descent,
            baseline: ascent,
            x_offset,
        }
    }

    fn cap_height(&self) -> i32 {
        self.get_rendered_dimensions('H', Point::zero(), VerticalPosition::Baseline)
            .ok()
            .and_then(|d| d.bounding_box)
            .map_or(0, |b| b.size.height.cast_signed())
    }
}
