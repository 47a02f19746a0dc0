//! Spec document assembly.
//!
//! Turns a raw artboard/layer dump (as a host plugin would export it) into a
//! normalized, serializable spec document: styles extracted, names
//! HTML-encoded, one slug per artboard, slice layers collected separately.

use serde::{Deserialize, Serialize};

use crate::config::MarkupConfig;
use crate::error::Result;
use crate::extract::{borders_from_style, fills_from_style, shadows_from_style};
use crate::types::{BorderData, Color, ColorFormat, Paint, RawStyle, Rect, ShadowData};

/// The broad kind of a layer, as the annotation pipeline cares about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Text,
    Symbol,
    Slice,
    Shape,
}

/// An export format attached to a slice or exportable layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportFormat {
    pub name: String,
    pub format: String,
    pub path: String,
}

/// A raw layer record from a host dump.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLayer {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub name: String,
    pub rect: Rect,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub radius: Option<Vec<f64>>,
    #[serde(default)]
    pub style: RawStyle,
    #[serde(default)]
    pub style_name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub exportable: Vec<ExportFormat>,
}

/// A raw annotation note attached to an artboard.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNote {
    pub rect: Rect,
    pub note: String,
}

/// A raw artboard record from a host dump.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArtboard {
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub name: String,
    pub page_name: String,
    #[serde(rename = "pageObjectID")]
    pub page_object_id: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub layers: Vec<RawLayer>,
    #[serde(default)]
    pub notes: Vec<RawNote>,
}

/// A named color from the host document's palette.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocumentColor {
    #[serde(default)]
    pub name: Option<String>,
    pub color: String,
}

/// The top-level raw dump.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    pub artboards: Vec<RawArtboard>,
    pub colors: Vec<RawDocumentColor>,
}

/// A normalized layer record in a spec document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerData {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub name: String,
    pub rect: Rect,
    pub rotation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Vec<f64>>,
    pub borders: Vec<BorderData>,
    pub fills: Vec<Paint>,
    pub shadows: Vec<ShadowData>,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_face: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_spacing: Option<f64>,
    pub exportable: Vec<ExportFormat>,
}

/// A note rendered into the spec viewer.
#[derive(Debug, Clone, Serialize)]
pub struct NoteData {
    pub rect: Rect,
    pub note: String,
}

/// A normalized artboard with its layers and notes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtboardData {
    pub page_name: String,
    #[serde(rename = "pageObjectID")]
    pub page_object_id: String,
    pub name: String,
    pub slug: String,
    #[serde(rename = "objectID")]
    pub object_id: String,
    pub width: f64,
    pub height: f64,
    pub notes: Vec<NoteData>,
    pub layers: Vec<LayerData>,
}

/// A named document color with its parsed value.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentColor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub color: Color,
}

/// The complete spec document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDocument {
    pub scale: f64,
    pub unit: String,
    pub color_format: ColorFormat,
    pub artboards: Vec<ArtboardData>,
    pub slices: Vec<LayerData>,
    pub colors: Vec<DocumentColor>,
}

/// Build a spec document from a raw dump.
///
/// Artboard and layer order is preserved. Slice layers additionally land in
/// the document-level `slices` list so asset viewers can list them without
/// walking every artboard.
pub fn build_document(raw: &RawDocument, config: &MarkupConfig) -> Result<SpecDocument> {
    let mut artboards = Vec::with_capacity(raw.artboards.len());
    let mut slices = Vec::new();

    for artboard in &raw.artboards {
        let mut layers = Vec::with_capacity(artboard.layers.len());
        for layer in &artboard.layers {
            let data = layer_data(layer)?;
            if data.kind == LayerKind::Slice {
                slices.push(data.clone());
            }
            layers.push(data);
        }

        let notes = artboard
            .notes
            .iter()
            .map(|n| NoteData {
                rect: n.rect,
                note: html_encode(&n.note).replace('\n', "<br>"),
            })
            .collect();

        artboards.push(ArtboardData {
            page_name: html_encode(&artboard.page_name),
            page_object_id: artboard.page_object_id.clone(),
            name: html_encode(&artboard.name),
            slug: slugify(&format!("{} {}", artboard.page_name, artboard.name)),
            object_id: artboard.object_id.clone(),
            width: artboard.width,
            height: artboard.height,
            notes,
            layers,
        });
    }

    let colors = raw
        .colors
        .iter()
        .map(|c| {
            Ok(DocumentColor {
                name: c.name.clone(),
                color: Color::parse(&c.color)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SpecDocument {
        scale: config.scale,
        unit: config.units.clone(),
        color_format: config.format,
        artboards,
        slices,
        colors,
    })
}

/// Normalize one raw layer.
pub fn layer_data(layer: &RawLayer) -> Result<LayerData> {
    let style = &layer.style;
    let color = match (&layer.kind, &style.text_color) {
        (LayerKind::Text, Some(hex)) => Some(Color::parse(hex)?),
        _ => None,
    };

    Ok(LayerData {
        object_id: layer.object_id.clone(),
        kind: layer.kind,
        name: html_encode(&layer.name),
        rect: layer.rect,
        rotation: layer.rotation,
        radius: layer.radius.clone(),
        borders: borders_from_style(style)?,
        fills: fills_from_style(style)?,
        shadows: shadows_from_style(style)?,
        opacity: style.opacity.unwrap_or(1.0),
        style_name: layer.style_name.clone(),
        content: layer.content.as_deref().map(html_encode),
        color,
        font_size: style.font_size,
        font_face: style.font_family.clone(),
        text_align: style.alignment.clone(),
        letter_spacing: style.kerning,
        line_height: style.line_height,
        paragraph_spacing: style.paragraph_spacing,
        exportable: layer.exportable.clone(),
    })
}

/// Escape user-supplied text for embedding in the HTML spec viewer.
///
/// Characters outside the basic multilingual plane (emoji, mostly) become
/// numeric entities, and the U+2028/U+2029 separators become their escape
/// sequences so they survive inline JSON.
pub fn html_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c > '\u{FFFF}' => {
                out.push_str(&format!("&#{};", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Lowercase, non-alphanumeric runs collapsed to single dashes.
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
