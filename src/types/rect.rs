//! Rectangle type shared by geometry math and spec documents.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in the host's canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge, `x + width`.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge, `y + height`.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}
