//! Gradient normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Color;
use crate::error::Result;

/// A point in the unit coordinate space of the shape the gradient fills.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientType {
    Linear,
    Radial,
    Angular,
}

impl fmt::Display for GradientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientType::Linear => f.write_str("Linear"),
            GradientType::Radial => f.write_str("Radial"),
            GradientType::Angular => f.write_str("Angular"),
        }
    }
}

/// A gradient record as exported by the host, colors still hex strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGradient {
    pub gradient_type: GradientType,
    #[serde(default)]
    pub from: Point,
    #[serde(default)]
    pub to: Point,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,
    #[serde(default)]
    pub stops: Vec<RawGradientStop>,
}

fn default_aspect_ratio() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGradientStop {
    pub position: f64,
    pub color: String,
}

/// One color sample along a gradient's span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub position: f64,
    pub color: Color,
}

/// A normalized gradient with parsed stop colors.
///
/// Stop order and positions are taken verbatim from the raw record; stops are
/// not sorted, renormalized, or deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    #[serde(rename = "type")]
    pub gradient_type: GradientType,
    pub from: Point,
    pub to: Point,
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: f64,
    #[serde(rename = "colorStops")]
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Normalize a raw gradient, parsing each stop color.
    pub fn from_raw(raw: &RawGradient) -> Result<Self> {
        let stops = raw
            .stops
            .iter()
            .map(|stop| {
                Ok(GradientStop {
                    position: stop.position,
                    color: Color::parse(&stop.color)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            gradient_type: raw.gradient_type,
            from: raw.from,
            to: raw.to,
            aspect_ratio: raw.aspect_ratio,
            stops,
        })
    }
}
