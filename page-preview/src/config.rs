// Preview configuration
//
// Optional JSON file describing the simulated display and the header
// layout. Every field has a default, so a partial file (or none) works.

use anyhow::{Context, Result};
use pagekit_ui::{HeaderLayout, IconSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Panel width of the reference 2.13" e-paper display in landscape
pub const DEFAULT_WIDTH: u32 = 250;
/// Panel height of the reference 2.13" e-paper display in landscape
pub const DEFAULT_HEIGHT: u32 = 122;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Simulated display width in pixels
    pub width: u32,

    /// Simulated display height in pixels
    pub height: u32,

    /// Header geometry and clock format
    pub header: HeaderLayout,

    /// Glyphs for the status icons and boot indicator.
    ///
    /// Defaults to plain text because the bundled u8g2 fonts have no icon
    /// range.
    pub icons: IconSet,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            header: HeaderLayout::default(),
            icons: IconSet::ascii(),
        }
    }
}

impl PreviewConfig {
    /// Load from `path`, or use the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!("Display size must be non-zero, got {}x{}", self.width, self.height);
        }

        if self.header.height < 0 || i64::from(self.header.height) > i64::from(self.height) {
            anyhow::bail!(
                "Header height {} does not fit a display {} pixels high",
                self.header.height,
                self.height
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = PreviewConfig::load(None).unwrap();
        assert_eq!(config, PreviewConfig::default());
        assert_eq!(config.header.height, 24);
        assert_eq!(config.icons, IconSet::ascii());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"width": 128, "header": {{"height": 16}}}}"#).unwrap();

        let config = PreviewConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.width, 128);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.header.height, 16);
        assert_eq!(config.header.time_format, "%d.%m %H:%M");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PreviewConfig::load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_header_taller_than_display_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"height": 20, "header": {{"height": 24}}}}"#).unwrap();

        assert!(PreviewConfig::load(Some(file.path())).is_err());
    }
}
