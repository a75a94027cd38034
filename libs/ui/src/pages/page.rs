//! Page with a status header
//!
//! The header shows the clock on the left and the API/WiFi icon cluster on
//! the right, separated from the content by a line. The page itself is the
//! area below the header.

use super::{HeaderLayout, HeaderStatus, PageStyle};
use crate::container::{Container, delegate_surface};
use crate::icons::{ApiIcon, WifiIcon};
use crate::surface::{DrawingSurface, TextAlign};
use core::ops::{Deref, DerefMut};

pub struct Page<'a, P: DrawingSurface + ?Sized> {
    content: Container<'a, P>,
}

impl<'a, P: DrawingSurface + ?Sized> Page<'a, P> {
    /// Draw the header on `parent` and return the content area below it.
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
        let width = parent.get_width();
        let height = parent.get_height();
        let mut content = Container::new(parent, 0, layout.height, width, height - layout.height);
        draw_header(content.get_parent(), layout, style, status)?;
        Ok(Self { content })
    }
}

impl<'a, P: DrawingSurface + ?Sized> Deref for Page<'a, P> {
    type Target = Container<'a, P>;

    fn deref(&self) -> &Self::Target {
        &self.content
    }
}

impl<P: DrawingSurface + ?Sized> DerefMut for Page<'_, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.content
    }
}

delegate_surface!(Page, content);

fn draw_header<S: DrawingSurface + ?Sized>(
    it: &mut S,
    layout: &HeaderLayout,
    style: &PageStyle<'_, S::Font>,
    status: &HeaderStatus,
) -> Result<(), S::Error> {
    let color = it.foreground();
    let width = it.get_width();
    let baseline = layout.baseline();

    it.strftime(
        layout.margin,
        baseline,
        style.header_font,
        color,
        TextAlign::BASELINE_LEFT,
        &layout.time_format,
        &status.now,
    )?;

    let api = ApiIcon::from_connected(status.api_connected);
    let wifi = WifiIcon::from_percent(status.wifi_percent);
    log::trace!("Header icons: api={api:?} wifi={wifi:?} ({}%)", status.wifi_percent);
    it.print(
        width - layout.margin,
        baseline + layout.icon_drop,
        style.header_font,
        color,
        TextAlign::BASELINE_RIGHT,
        &style.icons.status_cluster(api, wifi),
    )?;

    let separator = layout.separator_y();
    it.line(0, separator, width, separator, color)
}
