//! Boot frame rendering

use crate::config::PreviewConfig;
use crate::framebuffer::Framebuffer;
use anyhow::{Context, Result};
use pagekit_ui::{BootPage, GraphicsSurface, HeaderStatus, PageStyle, fonts};
use u8g2_fonts::FontRenderer;

/// Render one boot frame for `status` into a fresh framebuffer
pub fn render_boot(config: &PreviewConfig, status: &HeaderStatus) -> Result<Framebuffer> {
    let mut framebuffer = Framebuffer::new(config.width, config.height);
    let header_font = FontRenderer::new::<fonts::FONT_HEADER>();
    let glyph_font = FontRenderer::new::<fonts::FONT_GLYPH>();
    let style = PageStyle {
        header_font: &header_font,
        glyph_font: &glyph_font,
        icons: &config.icons,
    };

    {
        let mut surface = GraphicsSurface::new(&mut framebuffer);
        BootPage::with_layout(&mut surface, &config.header, &style, status)
            .context("Failed to draw boot page")?;
    }

    Ok(framebuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use embedded_graphics::pixelcolor::BinaryColor;
    use core::convert::Infallible;
    use pagekit_ui::{IconSet, SurfaceError};

    fn status() -> HeaderStatus {
        HeaderStatus {
            now: NaiveDate::from_ymd_opt(2026, 10, 16)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            wifi_percent: 55.0,
            api_connected: true,
        }
    }

    #[test]
    fn test_separator_spans_width() {
        let config = PreviewConfig::default();
        let fb = render_boot(&config, &status()).unwrap();

        for x in 0..config.width {
            assert_eq!(fb.pixel(x, 23), Some(BinaryColor::Off), "x = {x}");
        }
    }

    #[test]
    fn test_glyph_lands_in_content_area() {
        let config = PreviewConfig::default();
        let fb = render_boot(&config, &status()).unwrap();

        // Content is 250x98 below the header; the glyph is centered at (125, 73)
        let ink_near_center = (110..140)
            .flat_map(|x| (50..96).map(move |y| (x, y)))
            .any(|(x, y)| fb.pixel(x, y) == Some(BinaryColor::Off));
        assert!(ink_near_center);
    }

    #[test]
    fn test_icon_font_mismatch_is_reported() {
        let config = PreviewConfig {
            icons: IconSet::default(),
            ..PreviewConfig::default()
        };
        let err = render_boot(&config, &status()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to draw boot page");
        assert!(format!("{err:#}").contains("not found in font"));

        let source = err
            .downcast_ref::<SurfaceError<Infallible>>()
            .expect("surface error kept as the source");
        assert!(matches!(source, SurfaceError::GlyphNotFound(_)));
    }
}
