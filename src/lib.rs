//! redline - design spec normalizer
//!
//! A library for turning raw style and geometry records exported from a
//! design tool into normalized spec data: structured colors, gradients,
//! filtered fill/border/shadow lists, display-ready length strings, and the
//! rectangle math annotation layouts need.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod geometry;
pub mod output;
pub mod summary;
pub mod types;
pub mod units;

pub use config::{MarkupConfig, Property};
pub use error::{RedlineError, Result};
pub use export::{
    build_document, html_encode, slugify, ArtboardData, DocumentColor, ExportFormat, LayerData,
    LayerKind, NoteData, RawArtboard, RawDocument, RawLayer, SpecDocument,
};
pub use extract::{borders_from_style, fills_from_style, shadows_from_style};
pub use geometry::{edge_distances, is_intersect, is_intersect_x, is_intersect_y, EdgeDistances};
pub use summary::{border_summary, layer_properties, paint_summary, shadow_summary};
pub use types::{
    BorderData, BorderPosition, Color, ColorFormat, FillKind, Gradient, GradientStop,
    GradientType, Paint, Point, RawGradient, RawStyle, Rect, ShadowData, ShadowKind,
};
pub use units::{convert, length, lengths, percentage, PercentageBase};
