//! Root surface over an `embedded-graphics` draw target
//!
//! Text is rendered with u8g2 fonts, images are BMP assets, and every draw
//! goes through the innermost active clip rectangle.

use crate::surface::{DrawingSurface, HorizontalAlign, TextAlign, VerticalAlign};
use chrono::NaiveDateTime;
use core::fmt::Write;
use embedded_graphics::{
    Drawable,
    image::Image,
    pixelcolor::BinaryColor,
    prelude::{Dimensions, DrawTarget, DrawTargetExt, Point, Primitive, Size},
    primitives::{Line, PrimitiveStyle, Rectangle},
};
use thiserror::Error;
use tinybmp::Bmp;
use u8g2_fonts::{
    FontRenderer,
    types::{FontColor, HorizontalAlignment, VerticalPosition},
};

#[derive(Error, Debug)]
pub enum SurfaceError<E> {
    #[error("Display error: {0:?}")]
    Display(E),
    #[error("Glyph {0:?} not found in font")]
    GlyphNotFound(char),
    #[error("Font renderer error")]
    Font,
    #[error("Invalid time format: {0:?}")]
    TimeFormat(String),
    #[error("end_clipping called without an active clip region")]
    ClipUnderflow,
}

impl<E> From<u8g2_fonts::Error<E>> for SurfaceError<E> {
    fn from(e: u8g2_fonts::Error<E>) -> Self {
        match e {
            u8g2_fonts::Error::DisplayError(e) => Self::Display(e),
            u8g2_fonts::Error::GlyphNotFound(c) => Self::GlyphNotFound(c),
            _ => Self::Font,
        }
    }
}

fn u8g2_alignment(align: TextAlign) -> (VerticalPosition, HorizontalAlignment) {
    let vertical = match align.vertical {
        VerticalAlign::Top => VerticalPosition::Top,
        VerticalAlign::Center => VerticalPosition::Center,
        VerticalAlign::Baseline => VerticalPosition::Baseline,
        VerticalAlign::Bottom => VerticalPosition::Bottom,
    };
    let horizontal = match align.horizontal {
        HorizontalAlign::Left => HorizontalAlignment::Left,
        HorizontalAlign::Center => HorizontalAlignment::Center,
        HorizontalAlign::Right => HorizontalAlignment::Right,
    };
    (vertical, horizontal)
}

fn size(width: i32, height: i32) -> Size {
    Size::new(width.max(0).cast_unsigned(), height.max(0).cast_unsigned())
}

pub struct GraphicsSurface<'d, D: DrawTarget<Color = BinaryColor>> {
    target: &'d mut D,
    foreground: BinaryColor,
    clip_stack: Vec<Rectangle>,
}

impl<'d, D: DrawTarget<Color = BinaryColor>> GraphicsSurface<'d, D> {
    /// Wrap `target`. Ink defaults to `BinaryColor::Off`, matching e-paper
    /// panels where `On` is the white background.
    pub fn new(target: &'d mut D) -> Self {
        Self {
            target,
            foreground: BinaryColor::Off,
            clip_stack: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_foreground(mut self, color: BinaryColor) -> Self {
        self.foreground = color;
        self
    }

    /// Number of clip regions currently pushed
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Area draws are currently restricted to
    pub fn clip_area(&self) -> Rectangle {
        self.clip_stack
            .last()
            .copied()
            .unwrap_or_else(|| self.target.bounding_box())
    }

    fn draw<F>(&mut self, f: F) -> Result<(), SurfaceError<D::Error>>
    where
        F: FnOnce(&mut embedded_graphics::draw_target::Clipped<'_, D>) -> Result<(), D::Error>,
    {
        let area = self.clip_area();
        f(&mut self.target.clipped(&area)).map_err(SurfaceError::Display)
    }
}

impl<D: DrawTarget<Color = BinaryColor>> DrawingSurface for GraphicsSurface<'_, D> {
    type Color = BinaryColor;
    type Font = FontRenderer;
    type Image = Bmp<'static, BinaryColor>;
    type Error = SurfaceError<D::Error>;

    fn foreground(&self) -> BinaryColor {
        self.foreground
    }

    fn print(
        &mut self,
        x: i32,
        y: i32,
        font: &FontRenderer,
        color: BinaryColor,
        align: TextAlign,
        text: &str,
    ) -> Result<(), Self::Error> {
        let (vertical, horizontal) = u8g2_alignment(align);
        let area = self.clip_area();
        font.render_aligned(
            text,
            Point::new(x, y),
            vertical,
            horizontal,
            FontColor::Transparent(color),
            &mut self.target.clipped(&area),
        )?;
        Ok(())
    }

    fn image(&mut self, x: i32, y: i32, image: &Self::Image) -> Result<(), Self::Error> {
        self.draw(|target| Image::new(image, Point::new(x, y)).draw(target))
    }

    fn line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: BinaryColor,
    ) -> Result<(), Self::Error> {
        self.draw(|target| {
            Line::new(Point::new(x1, y1), Point::new(x2, y2))
                .into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(target)
        })
    }

    fn rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: BinaryColor,
    ) -> Result<(), Self::Error> {
        self.draw(|target| {
            Rectangle::new(Point::new(x, y), size(width, height))
                .into_styled(PrimitiveStyle::with_stroke(color, 1))
                .draw(target)
        })
    }

    fn filled_rectangle(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: BinaryColor,
    ) -> Result<(), Self::Error> {
        let area = Rectangle::new(Point::new(x, y), size(width, height));
        self.draw(|target| target.fill_solid(&area, color))
    }

    fn strftime(
        &mut self,
        x: i32,
        y: i32,
        font: &FontRenderer,
        color: BinaryColor,
        align: TextAlign,
        format: &str,
        time: &NaiveDateTime,
    ) -> Result<(), Self::Error> {
        let mut text = String::new();
        write!(text, "{}", time.format(format))
            .map_err(|_| SurfaceError::TimeFormat(format.to_string()))?;
        self.print(x, y, font, color, align, &text)
    }

    fn start_clipping(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), Self::Error> {
        let requested = Rectangle::new(Point::new(x, y), size(width, height));
        let area = match self.clip_stack.last() {
            Some(outer) => requested.intersection(outer),
            None => requested,
        };
        self.clip_stack.push(area);
        Ok(())
    }

    fn end_clipping(&mut self) -> Result<(), Self::Error> {
        if self.clip_stack.pop().is_none() {
            log::warn!("end_clipping called with an empty clip stack");
            return Err(SurfaceError::ClipUnderflow);
        }
        Ok(())
    }

    fn get_width(&self) -> i32 {
        self.target.bounding_box().size.width.cast_signed()
    }

    fn get_height(&self) -> i32 {
        self.target.bounding_box().size.height.cast_signed()
    }
}
