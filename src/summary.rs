//! Annotation text for property bubbles.
//!
//! Renders normalized layer records into the short multi-line text shown
//! next to a marked layer. Which properties appear, and in what order, comes
//! from the config; properties a layer does not have are skipped.

use crate::config::{MarkupConfig, Property};
use crate::export::{LayerData, LayerKind};
use crate::types::{BorderData, ColorFormat, Paint, ShadowData, ShadowKind};
use crate::units;

/// One line (or block, for gradients) describing a paint.
pub fn paint_summary(paint: &Paint, format: ColorFormat) -> String {
    match paint {
        Paint::Color { color } => color.format(format),
        Paint::Gradient { gradient } => {
            let mut lines = vec![gradient.gradient_type.to_string()];
            for stop in &gradient.stops {
                lines.push(format!(
                    " {}%: {}",
                    (stop.position * 100.0).round(),
                    stop.color.format(format)
                ));
            }
            lines.join("\n")
        }
    }
}

/// `border: <thickness> <position>` plus an indented paint line.
pub fn border_summary(border: &BorderData, config: &MarkupConfig) -> String {
    format!(
        "border: {} {}\r\n * {}",
        units::length(border.thickness, false, config),
        border.position,
        paint_summary(&border.paint, config.format)
    )
}

/// Offset/blur/spread lines for one shadow; blur and spread are omitted when
/// zero.
pub fn shadow_summary(shadow: &ShadowData, config: &MarkupConfig) -> String {
    let mut lines = vec![format!(
        " * x, y - {}, {}",
        units::length(shadow.offset_x, false, config),
        units::length(shadow.offset_y, false, config)
    )];
    if shadow.blur_radius != 0.0 {
        lines.push(format!(
            " * blur - {}",
            units::length(shadow.blur_radius, false, config)
        ));
    }
    if shadow.spread != 0.0 {
        lines.push(format!(
            " * spread - {}",
            units::length(shadow.spread, false, config)
        ));
    }
    lines.join("\r\n")
}

/// The full annotation text for a layer, per the configured property list.
pub fn layer_properties(layer: &LayerData, config: &MarkupConfig) -> String {
    let lines: Vec<String> = config
        .properties
        .iter()
        .filter_map(|property| property_line(layer, *property, config))
        .collect();
    lines.join("\n")
}

fn property_line(layer: &LayerData, property: Property, config: &MarkupConfig) -> Option<String> {
    match property {
        Property::LayerName => Some(format!("layer-name: {}", layer.name)),
        Property::Color => {
            if layer.kind == LayerKind::Text {
                let color = layer.color.as_ref()?;
                Some(format!("color: {}", color.format(config.format)))
            } else {
                let fill = layer.fills.last()?;
                Some(format!("fill: {}", paint_summary(fill, config.format)))
            }
        }
        Property::Border => {
            let border = layer.borders.last()?;
            Some(border_summary(border, config))
        }
        Property::Opacity => Some(format!(
            "opacity: {}%",
            (layer.opacity * 100.0).round()
        )),
        Property::Radius => {
            let radius = layer.radius.as_ref()?;
            Some(format!("radius: {}", units::lengths(radius, false, config)))
        }
        Property::Shadow => {
            let outer = layer.shadows.iter().find(|s| s.kind == ShadowKind::Outer);
            let inner = layer.shadows.iter().find(|s| s.kind == ShadowKind::Inner);
            let mut blocks = Vec::new();
            if let Some(shadow) = outer {
                blocks.push(format!("shadow: outer\r\n{}", shadow_summary(shadow, config)));
            }
            if let Some(shadow) = inner {
                blocks.push(format!("shadow: inner\r\n{}", shadow_summary(shadow, config)));
            }
            if blocks.is_empty() {
                None
            } else {
                Some(blocks.join("\n"))
            }
        }
        Property::FontSize => {
            let size = layer.font_size?;
            Some(format!("font-size: {}", units::length(size, true, config)))
        }
        Property::FontFace => {
            let face = layer.font_face.as_ref()?;
            Some(format!("font-face: {}", face))
        }
        Property::Character => {
            let spacing = layer.letter_spacing?;
            Some(format!("character: {}", units::length(spacing, true, config)))
        }
        Property::LineHeight => {
            let line_height = layer.line_height?;
            let font_size = layer.font_size?;
            let ratio = (line_height / font_size * 10.0).round() / 10.0;
            Some(format!(
                "line: {} ({})",
                units::length(line_height, true, config),
                ratio
            ))
        }
        Property::Paragraph => {
            let spacing = layer.paragraph_spacing?;
            Some(format!("paragraph: {}", units::length(spacing, true, config)))
        }
        Property::StyleName => {
            let name = layer.style_name.as_ref()?;
            Some(format!("style-name: {}", name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        BorderPosition, Color, Gradient, GradientStop, GradientType, Point, Rect,
    };
    use pretty_assertions::assert_eq;

    fn base_layer(kind: LayerKind) -> LayerData {
        LayerData {
            object_id: "L1".to_string(),
            kind,
            name: "Layer".to_string(),
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            rotation: 0.0,
            radius: None,
            borders: Vec::new(),
            fills: Vec::new(),
            shadows: Vec::new(),
            opacity: 1.0,
            style_name: None,
            content: None,
            color: None,
            font_size: None,
            font_face: None,
            text_align: None,
            letter_spacing: None,
            line_height: None,
            paragraph_spacing: None,
            exportable: Vec::new(),
        }
    }

    #[test]
    fn test_paint_summary_color() {
        let paint = Paint::Color {
            color: Color::parse("#FF000080").unwrap(),
        };
        assert_eq!(paint_summary(&paint, ColorFormat::ColorHex), "#FF0000 50%");
        assert_eq!(
            paint_summary(&paint, ColorFormat::CssRgba),
            "rgba(255,0,0,0.5)"
        );
    }

    #[test]
    fn test_paint_summary_gradient() {
        let paint = Paint::Gradient {
            gradient: Gradient {
                gradient_type: GradientType::Linear,
                from: Point::default(),
                to: Point::new(0.0, 1.0),
                aspect_ratio: 1.0,
                stops: vec![
                    GradientStop {
                        position: 0.0,
                        color: Color::rgb(255, 0, 0),
                    },
                    GradientStop {
                        position: 0.5,
                        color: Color::rgb(0, 0, 255),
                    },
                ],
            },
        };
        assert_eq!(
            paint_summary(&paint, ColorFormat::ColorHex),
            "Linear\n 0%: #FF0000 100%\n 50%: #0000FF 100%"
        );
    }

    #[test]
    fn test_border_summary() {
        let border = BorderData {
            paint: Paint::Color {
                color: Color::rgb(0, 0, 0),
            },
            position: BorderPosition::Inside,
            thickness: 2.0,
        };
        assert_eq!(
            border_summary(&border, &MarkupConfig::default()),
            "border: 2px Inside\r\n * #000000 100%"
        );
    }

    #[test]
    fn test_shadow_summary_omits_zero_blur_and_spread() {
        let shadow = ShadowData {
            kind: ShadowKind::Outer,
            offset_x: 0.0,
            offset_y: 2.0,
            blur_radius: 0.0,
            spread: 0.0,
            color: Color::new(0, 0, 0, 64),
        };
        assert_eq!(
            shadow_summary(&shadow, &MarkupConfig::default()),
            " * x, y - 0px, 2px"
        );
    }

    #[test]
    fn test_shadow_summary_full() {
        let shadow = ShadowData {
            kind: ShadowKind::Outer,
            offset_x: 1.0,
            offset_y: 2.0,
            blur_radius: 4.0,
            spread: 3.0,
            color: Color::new(0, 0, 0, 64),
        };
        assert_eq!(
            shadow_summary(&shadow, &MarkupConfig::default()),
            " * x, y - 1px, 2px\r\n * blur - 4px\r\n * spread - 3px"
        );
    }

    #[test]
    fn test_layer_properties_shape() {
        let mut layer = base_layer(LayerKind::Shape);
        layer.fills.push(Paint::Color {
            color: Color::rgb(255, 0, 0),
        });
        layer.radius = Some(vec![4.0, 4.0, 0.0, 0.0]);

        let config = MarkupConfig {
            properties: vec![
                Property::LayerName,
                Property::Color,
                Property::Opacity,
                Property::Radius,
                Property::FontSize,
            ],
            ..MarkupConfig::default()
        };

        assert_eq!(
            layer_properties(&layer, &config),
            "layer-name: Layer\nfill: #FF0000 100%\nopacity: 100%\nradius: 4px 4px 0px 0px"
        );
    }

    #[test]
    fn test_layer_properties_text() {
        let mut layer = base_layer(LayerKind::Text);
        layer.color = Some(Color::rgb(0x33, 0x33, 0x33));
        layer.font_size = Some(16.0);
        layer.line_height = Some(24.0);

        let config = MarkupConfig {
            properties: vec![Property::Color, Property::FontSize, Property::LineHeight],
            ..MarkupConfig::default()
        };

        assert_eq!(
            layer_properties(&layer, &config),
            "color: #333333 100%\nfont-size: 16px\nline: 24px (1.5)"
        );
    }

    #[test]
    fn test_layer_properties_uses_last_fill() {
        let mut layer = base_layer(LayerKind::Shape);
        layer.fills.push(Paint::Color {
            color: Color::rgb(255, 0, 0),
        });
        layer.fills.push(Paint::Color {
            color: Color::rgb(0, 255, 0),
        });

        let config = MarkupConfig {
            properties: vec![Property::Color],
            ..MarkupConfig::default()
        };

        assert_eq!(layer_properties(&layer, &config), "fill: #00FF00 100%");
    }

    #[test]
    fn test_layer_properties_shadow_outer_then_inner() {
        let mut layer = base_layer(LayerKind::Shape);
        layer.shadows.push(ShadowData {
            kind: ShadowKind::Inner,
            offset_x: 0.0,
            offset_y: 1.0,
            blur_radius: 0.0,
            spread: 0.0,
            color: Color::new(0, 0, 0, 64),
        });
        layer.shadows.push(ShadowData {
            kind: ShadowKind::Outer,
            offset_x: 0.0,
            offset_y: 2.0,
            blur_radius: 0.0,
            spread: 0.0,
            color: Color::new(0, 0, 0, 64),
        });

        let config = MarkupConfig {
            properties: vec![Property::Shadow],
            ..MarkupConfig::default()
        };

        assert_eq!(
            layer_properties(&layer, &config),
            "shadow: outer\r\n * x, y - 0px, 2px\nshadow: inner\r\n * x, y - 0px, 1px"
        );
    }

    #[test]
    fn test_layer_properties_skips_absent() {
        let layer = base_layer(LayerKind::Shape);
        let config = MarkupConfig {
            properties: vec![Property::Color, Property::Border, Property::StyleName],
            ..MarkupConfig::default()
        };
        assert_eq!(layer_properties(&layer, &config), "");
    }
}
