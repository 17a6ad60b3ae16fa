use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    layout::DEFAULT_LABEL_WIDTH,
    style::DrawOptions,
};

/// Session settings, usually read from a TOML file.
///
/// ```toml
/// label_width = 80
/// font = "hack"
/// font_size = 14
///
/// [draw_options]
/// camera = "screen"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Width of the label column in label + control helpers.
    pub label_width: i32,
    /// Options handed to the backend on draw.
    pub draw_options: DrawOptions,
    /// Name of a font to select at startup.
    pub font: Option<String>,
    /// Font size to select at startup.
    pub font_size: Option<i32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
            draw_options: DrawOptions::default(),
            font: None,
            font_size: None,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Reject values the backend can't use.
    fn validate(&self) -> Result<()> {
        if self.label_width < 0 {
            return Err(Error::Config(format!(
                "label_width must not be negative, got {}",
                self.label_width
            )));
        }
        if let Some(size) = self.font_size.filter(|s| *s <= 0) {
            return Err(Error::Config(format!(
                "font_size must be positive, got {size}"
            )));
        }
        Ok(())
    }
}
