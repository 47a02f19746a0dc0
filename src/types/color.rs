//! Color type, parsing, and display representations.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{RedlineError, Result};

/// An RGBA color parsed from an `#RRGGBBAA` hex string.
///
/// The five textual representations (`color-hex`, `argb-hex`, `rgba-hex`,
/// `css-rgba`, `ui-color`) are always recomputed from the component bytes,
/// never cached, so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse an `#RRGGBBAA` hex string (case-insensitive, 8 digits).
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#').ok_or_else(|| invalid(s))?;
        // from_str_radix alone would accept sign characters
        if hex.len() != 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid(s));
        }
        let byte = |range| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid(s));
        Ok(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
            a: byte(6..8)?,
        })
    }

    /// `#RRGGBB` plus the alpha as a whole percentage, e.g. `#FF0000 50%`.
    pub fn color_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X} {}%",
            self.r,
            self.g,
            self.b,
            self.alpha_percent()
        )
    }

    /// Alpha-first hex, e.g. `#80FF0000`.
    pub fn argb_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// The canonical `#RRGGBBAA` form, uppercase.
    pub fn rgba_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// CSS `rgba()` notation, e.g. `rgba(255,0,0,0.5)`.
    ///
    /// Alpha is `round(a / 255 * 100) / 100`, a valid CSS 0-1 value with at
    /// most two decimals.
    pub fn css_rgba(&self) -> String {
        let alpha = (self.a as f64 / 255.0 * 100.0).round() / 100.0;
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }

    /// Component list form, e.g. `(r:255.00 g:0.00 b:0.00 a:128.00)`.
    pub fn ui_color(&self) -> String {
        format!(
            "(r:{:.2} g:{:.2} b:{:.2} a:{:.2})",
            self.r as f64, self.g as f64, self.b as f64, self.a as f64
        )
    }

    /// Render this color in the given representation.
    pub fn format(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::ColorHex => self.color_hex(),
            ColorFormat::ArgbHex => self.argb_hex(),
            ColorFormat::RgbaHex => self.rgba_hex(),
            ColorFormat::CssRgba => self.css_rgba(),
            ColorFormat::UiColor => self.ui_color(),
        }
    }

    /// Alpha as a whole percentage of full opacity.
    pub fn alpha_percent(&self) -> u32 {
        (self.a as f64 / 255.0 * 100.0).round() as u32
    }

    /// Check if the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

fn invalid(value: &str) -> RedlineError {
    RedlineError::Color {
        value: value.to_string(),
        help: Some("Colors must be 8 hex digits: #RRGGBBAA".to_string()),
    }
}

impl FromStr for Color {
    type Err = RedlineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rgba_hex())
    }
}

// Spec documents carry the components and every representation side by side,
// so serialization emits all of them from the single (r,g,b,a) source.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Color", 9)?;
        s.serialize_field("r", &self.r)?;
        s.serialize_field("g", &self.g)?;
        s.serialize_field("b", &self.b)?;
        s.serialize_field("a", &self.a)?;
        s.serialize_field("color-hex", &self.color_hex())?;
        s.serialize_field("argb-hex", &self.argb_hex())?;
        s.serialize_field("rgba-hex", &self.rgba_hex())?;
        s.serialize_field("css-rgba", &self.css_rgba())?;
        s.serialize_field("ui-color", &self.ui_color())?;
        s.end()
    }
}

/// Which textual representation of a color to show in annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorFormat {
    #[default]
    ColorHex,
    ArgbHex,
    RgbaHex,
    CssRgba,
    UiColor,
}

impl ColorFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::ColorHex => "color-hex",
            ColorFormat::ArgbHex => "argb-hex",
            ColorFormat::RgbaHex => "rgba-hex",
            ColorFormat::CssRgba => "css-rgba",
            ColorFormat::UiColor => "ui-color",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = RedlineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "color-hex" => Ok(ColorFormat::ColorHex),
            "argb-hex" => Ok(ColorFormat::ArgbHex),
            "rgba-hex" => Ok(ColorFormat::RgbaHex),
            "css-rgba" => Ok(ColorFormat::CssRgba),
            "ui-color" => Ok(ColorFormat::UiColor),
            _ => Err(RedlineError::Config {
                message: format!("Unknown color format: {}", s),
                help: Some(
                    "Use color-hex, argb-hex, rgba-hex, css-rgba, or ui-color".to_string(),
                ),
            }),
        }
    }
}
