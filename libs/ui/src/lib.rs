//! Offset-translating drawing containers and page layouts for small displays
//!
//! Layout code draws in the local coordinates of a [`Container`]; every call
//! is shifted by the container's offset and forwarded to its parent until it
//! reaches a root [`DrawingSurface`] that actually draws. [`Page`] adds a
//! status header on top of the parent and [`BootPage`] adds a centered boot
//! glyph to a page.

pub mod container;
pub mod fonts;
pub mod graphics;
pub mod icons;
pub mod pages;
pub mod surface;
pub mod test_utils;

// Re-export commonly used types
pub use container::{Container, Region};
pub use graphics::{GraphicsSurface, SurfaceError};
pub use icons::{ApiIcon, IconSet, WifiIcon};
pub use pages::{BootPage, HeaderLayout, HeaderStatus, Page, PageStyle};
pub use surface::{ClipGuard, DrawingSurface, Font, TextAlign, TextMetrics};
