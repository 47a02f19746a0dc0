//! Core domain types for redline.
//!
//! This module contains the value types the normalization pipeline produces:
//! - `Color` - parsed RGBA colors with their display representations
//! - `Gradient` - normalized gradients with parsed stop colors
//! - `Paint` / `BorderData` / `ShadowData` - normalized style entries
//! - `Rect` - rectangles for geometry math

mod color;
mod gradient;
mod rect;
mod style;

pub use color::{Color, ColorFormat};
pub use gradient::{Gradient, GradientStop, GradientType, Point, RawGradient, RawGradientStop};
pub use rect::Rect;
pub use style::{
    BorderData, BorderPosition, FillKind, Paint, RawBorder, RawFill, RawShadow, RawStyle,
    ShadowData, ShadowKind,
};
