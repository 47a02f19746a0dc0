//! Raw style records and their normalized counterparts.
//!
//! The `Raw*` types mirror the shape of a host export dump: flat lists of
//! fills, borders, and shadows, each with an `enabled` flag and a fill-kind
//! tag. The normalized types (`Paint`, `BorderData`, `ShadowData`) are what
//! spec documents and annotation text are built from.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Color, Gradient, RawGradient};

/// The paint kind tag on a raw fill or border entry.
///
/// Only `Color` and `Gradient` survive extraction; pattern, noise, and any
/// kinds added by future host versions are dropped from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillKind {
    Color,
    Gradient,
    Pattern,
    Noise,
    #[serde(other)]
    Other,
}

/// Where a border sits relative to the shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderPosition {
    Center,
    Inside,
    Outside,
}

impl fmt::Display for BorderPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorderPosition::Center => f.write_str("Center"),
            BorderPosition::Inside => f.write_str("Inside"),
            BorderPosition::Outside => f.write_str("Outside"),
        }
    }
}

/// Whether a shadow renders outside or inside the shape bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowKind {
    Outer,
    Inner,
}

/// A style record as exported by the host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawStyle {
    pub fills: Vec<RawFill>,
    pub borders: Vec<RawBorder>,
    pub shadows: Vec<RawShadow>,
    pub inner_shadows: Vec<RawShadow>,
    pub opacity: Option<f64>,
    // Text styles only.
    pub text_color: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub alignment: Option<String>,
    pub line_height: Option<f64>,
    pub kerning: Option<f64>,
    pub paragraph_spacing: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFill {
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    pub fill_type: FillKind,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub gradient: Option<RawGradient>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBorder {
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    pub fill_type: FillKind,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub gradient: Option<RawGradient>,
    #[serde(default = "position_default")]
    pub position: BorderPosition,
    #[serde(default)]
    pub thickness: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawShadow {
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub blur: f64,
    #[serde(default)]
    pub spread: f64,
    pub color: String,
}

fn enabled_default() -> bool {
    true
}

fn position_default() -> BorderPosition {
    BorderPosition::Center
}

/// A normalized paint: a parsed flat color or a normalized gradient.
///
/// Serializes with a `fillType` tag next to the payload, matching the layer
/// records in spec documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "fillType")]
pub enum Paint {
    Color { color: Color },
    Gradient { gradient: Gradient },
}

/// A normalized border: paint plus position and thickness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorderData {
    #[serde(flatten)]
    pub paint: Paint,
    pub position: BorderPosition,
    pub thickness: f64,
}

/// A normalized shadow, tagged outer or inner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowData {
    #[serde(rename = "type")]
    pub kind: ShadowKind,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur_radius: f64,
    pub spread: f64,
    pub color: Color,
}
