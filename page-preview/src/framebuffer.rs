use core::convert::Infallible;
use embedded_graphics::{
    geometry::Dimensions,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, PointsIter, Size},
    primitives::Rectangle,
};

trait AsFillByte {
    fn as_byte(&self) -> u8;
}

impl AsFillByte for BinaryColor {
    fn as_byte(&self) -> u8 {
        if self.is_on() { 0xFF } else { 0x00 }
    }
}

/// 1-bit in-memory display, one bit per pixel, rows padded to whole bytes.
///
/// A set bit is `BinaryColor::On` (paper), a cleared bit is ink.
#[derive(Debug)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    buffer: Box<[u8]>,
}

impl Framebuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let size = width.div_ceil(8) as usize * height as usize;
        let buffer = vec![BinaryColor::On.as_byte(); size].into_boxed_slice();
        Self {
            width,
            height,
            buffer,
        }
    }

    fn row_pitch(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Colour at `(x, y)`, `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<BinaryColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.row_pitch() + x as usize / 8;
        let bit = 7 - (x % 8);
        Some(BinaryColor::from(self.buffer[index] & (1 << bit) != 0))
    }

    /// Binary PBM (P4). PBM uses 1 for black, so bits are inverted.
    pub fn to_pbm(&self) -> Vec<u8> {
        let mut out = format!("P4\n{} {}\n", self.width, self.height).into_bytes();
        out.extend(self.buffer.iter().map(|byte| !byte));
        out
    }

    /// One line per row, `#` for ink and `.` for paper
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let ink = self.pixel(x, y) == Some(BinaryColor::Off);
                out.push(if ink { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let row_pitch = self.row_pitch();

        for Pixel(coord, color) in pixels {
            let (x, y) = coord.into();

            if x < 0 || x >= self.width.cast_signed() || y < 0 || y >= self.height.cast_signed() {
                continue;
            }

            let index = y.cast_unsigned() as usize * row_pitch + x.cast_unsigned() as usize / 8;
            let bit = 7 - (x % 8);

            if color.is_on() {
                self.buffer[index] |= 1 << bit;
            } else {
                self.buffer[index] &= !(1 << bit);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped_area = area.intersection(&self.bounding_box());

        if clipped_area.is_zero_sized() {
            return Ok(());
        }

        self.draw_iter(clipped_area.points().map(|p| Pixel(p, color)))
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        self.buffer.fill(color.as_byte());
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::Point;

    #[test]
    fn test_starts_blank() {
        let fb = Framebuffer::new(10, 3);
        assert_eq!(fb.pixel(0, 0), Some(BinaryColor::On));
        assert_eq!(fb.pixel(9, 2), Some(BinaryColor::On));
        assert_eq!(fb.pixel(10, 0), None);
    }

    #[test]
    fn test_draw_sets_single_bit() {
        let mut fb = Framebuffer::new(10, 3);
        fb.draw_iter([Pixel(Point::new(9, 1), BinaryColor::Off)]).unwrap();

        assert_eq!(fb.pixel(9, 1), Some(BinaryColor::Off));
        assert_eq!(fb.pixel(8, 1), Some(BinaryColor::On));
        assert_eq!(fb.pixel(9, 0), Some(BinaryColor::On));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut fb = Framebuffer::new(4, 4);
        fb.draw_iter([
            Pixel(Point::new(-1, 0), BinaryColor::Off),
            Pixel(Point::new(0, 4), BinaryColor::Off),
        ])
        .unwrap();
        assert!(!fb.to_ascii().contains('#'));
    }

    #[test]
    fn test_pbm_layout() {
        let mut fb = Framebuffer::new(10, 2);
        fb.draw_iter([Pixel(Point::new(0, 0), BinaryColor::Off)]).unwrap();

        let pbm = fb.to_pbm();
        let header = b"P4\n10 2\n";
        assert_eq!(&pbm[..header.len()], header);
        // two bytes per row, ink is a set bit
        assert_eq!(&pbm[header.len()..], &[0x80, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_ascii_rows() {
        let mut fb = Framebuffer::new(3, 2);
        fb.fill_solid(
            &Rectangle::new(Point::new(1, 0), Size::new(2, 1)),
            BinaryColor::Off,
        )
        .unwrap();
        assert_eq!(fb.to_ascii(), ".##\n...\n");
    }
}
