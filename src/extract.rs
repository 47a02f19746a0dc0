//! Style extraction: raw style records to normalized fill/border/shadow lists.
//!
//! All three extractors skip entries whose `enabled` flag is off. Fill kinds
//! other than `Color` and `Gradient` are dropped from the output, not
//! reported as errors; a host document can carry pattern fills a spec export
//! has no use for.

use crate::error::{RedlineError, Result};
use crate::types::{
    BorderData, Color, FillKind, Gradient, Paint, RawGradient, RawShadow, RawStyle, ShadowData,
    ShadowKind,
};

/// Normalize the enabled fills of a style, in order.
pub fn fills_from_style(style: &RawStyle) -> Result<Vec<Paint>> {
    let mut fills = Vec::new();
    for fill in &style.fills {
        if !fill.enabled {
            continue;
        }
        if let Some(paint) = paint_from_entry(fill.fill_type, fill.color.as_deref(), fill.gradient.as_ref())? {
            fills.push(paint);
        }
    }
    Ok(fills)
}

/// Normalize the enabled borders of a style, carrying position and thickness.
pub fn borders_from_style(style: &RawStyle) -> Result<Vec<BorderData>> {
    let mut borders = Vec::new();
    for border in &style.borders {
        if !border.enabled {
            continue;
        }
        let paint =
            paint_from_entry(border.fill_type, border.color.as_deref(), border.gradient.as_ref())?;
        if let Some(paint) = paint {
            borders.push(BorderData {
                paint,
                position: border.position,
                thickness: border.thickness,
            });
        }
    }
    Ok(borders)
}

/// Normalize the enabled shadows of a style.
///
/// Outer shadows come first, then inner shadows, regardless of how the raw
/// record interleaves them. Annotation text relies on this ordering.
pub fn shadows_from_style(style: &RawStyle) -> Result<Vec<ShadowData>> {
    let mut shadows = Vec::new();
    for shadow in style.shadows.iter().filter(|s| s.enabled) {
        shadows.push(convert_shadow(shadow, ShadowKind::Outer)?);
    }
    for shadow in style.inner_shadows.iter().filter(|s| s.enabled) {
        shadows.push(convert_shadow(shadow, ShadowKind::Inner)?);
    }
    Ok(shadows)
}

fn convert_shadow(shadow: &RawShadow, kind: ShadowKind) -> Result<ShadowData> {
    Ok(ShadowData {
        kind,
        offset_x: shadow.x,
        offset_y: shadow.y,
        blur_radius: shadow.blur,
        spread: shadow.spread,
        color: Color::parse(&shadow.color)?,
    })
}

/// Build a paint from a raw entry's kind tag and payload fields.
///
/// Returns `Ok(None)` for unsupported kinds. A `Color` or `Gradient` entry
/// missing its payload is a malformed record and fails.
fn paint_from_entry(
    kind: FillKind,
    color: Option<&str>,
    gradient: Option<&RawGradient>,
) -> Result<Option<Paint>> {
    match kind {
        FillKind::Color => {
            let color = color.ok_or_else(|| RedlineError::Style {
                message: "Color fill entry has no color value".to_string(),
            })?;
            Ok(Some(Paint::Color {
                color: Color::parse(color)?,
            }))
        }
        FillKind::Gradient => {
            let gradient = gradient.ok_or_else(|| RedlineError::Style {
                message: "Gradient fill entry has no gradient record".to_string(),
            })?;
            Ok(Some(Paint::Gradient {
                gradient: Gradient::from_raw(gradient)?,
            }))
        }
        FillKind::Pattern | FillKind::Noise | FillKind::Other => Ok(None),
    }
}
