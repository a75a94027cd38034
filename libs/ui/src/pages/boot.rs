//! Boot splash: a page with one large glyph in the middle

use super::{HeaderLayout, HeaderStatus, Page, PageStyle};
use crate::container::delegate_surface;
use crate::surface::{DrawingSurface, TextAlign};
use core::ops::{Deref, DerefMut};

pub struct BootPage<'a, P: DrawingSurface + ?Sized> {
    page: Page<'a, P>,
}

impl<'a, P: DrawingSurface + ?Sized> BootPage<'a, P> {
    pub fn new(
        parent: &'a mut P,
        style: &PageStyle<'_, P::Font>,
        status: &HeaderStatus,
    ) -> Result<Self, P::Error> {
        Self::with_layout(parent, &HeaderLayout::default(), style, status)
    }

    pub fn with_layout(
        parent: &'a mut P,
        layout: &HeaderLayout,
        style: &PageStyle<'_, P::Font>,
        status: &HeaderStatus,
    ) -> Result<Self, P::Error> {
        let mut page = Page::with_layout(parent, layout, style, status)?;
        let color = page.foreground();
        let (x, y) = (page.get_width() / 2, page.get_height() / 2);
        page.print(x, y, style.glyph_font, color, TextAlign::CENTER, &style.icons.boot)?;
        Ok(Self { page })
    }
}

impl<'a, P: DrawingSurface + ?Sized> Deref for BootPage<'a, P> {
    type Target = Page<'a, P>;

    fn deref(&self) -> &Self::Target {
        &self.page
    }
}

impl<P: DrawingSurface + ?Sized> DerefMut for BootPage<'_, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.page
    }
}

delegate_surface!(BootPage, page);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconSet;
    use crate::test_utils::{DrawCall, FixedFont, RecordingSurface};
    use chrono::NaiveDate;

    #[test]
    fn test_glyph_centered_in_content() {
        let mut root = RecordingSurface::new(250, 240);
        let font = FixedFont::default();
        let icons = IconSet::default();
        let style = PageStyle {
            header_font: &font,
            glyph_font: &font,
            icons: &icons,
        };
        let status = HeaderStatus {
            now: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            wifi_percent: 20.0,
            api_connected: true,
        };

        let boot = BootPage::new(&mut root, &style, &status).unwrap();
        assert_eq!((boot.get_width() / 2, boot.get_height() / 2), (125, 108));
        drop(boot);

        // Header first, then the glyph at local (125, 108) = absolute (125, 132)
        assert_eq!(root.calls().len(), 4);
        assert_eq!(
            root.calls()[3],
            DrawCall::Print {
                x: 125,
                y: 132,
                align: TextAlign::CENTER,
                text: "\u{F07D0}".to_string(),
            }
        );
        assert_eq!(root.printed()[0], "\u{F0003}\u{F092F}");
    }
}
