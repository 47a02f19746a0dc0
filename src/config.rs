//! Markup configuration (redline.yaml).
//!
//! The host plugin keeps scale, units, and color format in process-wide
//! settings; here they are an explicit value passed into every call that
//! needs one. Loadable from a YAML file with defaults for every field.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RedlineError, Result};
use crate::types::ColorFormat;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "redline.yaml";

/// A property that can appear in a layer's annotation text, in the order
/// configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Property {
    LayerName,
    Color,
    Border,
    Opacity,
    Radius,
    Shadow,
    FontSize,
    FontFace,
    Character,
    LineHeight,
    Paragraph,
    StyleName,
}

/// Configuration for unit conversion, color formatting, and annotation
/// content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupConfig {
    /// Design-to-output scale divisor; lengths are divided by this.
    pub scale: f64,

    /// Unit suffix, or a `length/text` pair like `pt/sp`. The second unit,
    /// when present, applies to text metrics.
    pub units: String,

    /// Which color representation annotations show.
    pub format: ColorFormat,

    /// Properties rendered into layer annotation text, in order.
    pub properties: Vec<Property>,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            units: "px".to_string(),
            format: ColorFormat::ColorHex,
            properties: vec![
                Property::LayerName,
                Property::Color,
                Property::Border,
                Property::Opacity,
                Property::Radius,
                Property::Shadow,
                Property::FontSize,
                Property::FontFace,
                Property::Character,
                Property::LineHeight,
                Property::Paragraph,
                Property::StyleName,
            ],
        }
    }
}

impl MarkupConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RedlineError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| RedlineError::Config {
            message: format!("{}: {}", path.display(), e),
            help: Some("Expected fields: scale, units, format, properties".to_string()),
        })
    }

    /// The unit suffix for a value: first unit by default, second for text
    /// metrics when the units string carries one.
    pub fn unit(&self, is_text: bool) -> &str {
        let mut parts = self.units.split('/');
        let first = parts.next().unwrap_or_default();
        match parts.next() {
            Some(second) if is_text => second,
            _ => first,
        }
    }
}
