//! Length-to-display-string conversion.
//!
//! Raw lengths from the host are in design canvas points; annotations show
//! them divided by the configured scale, rounded to one decimal, with a unit
//! suffix. Percentage mode expresses a length relative to a container
//! dimension instead and bypasses scale and units entirely.

use crate::config::MarkupConfig;
use crate::types::Rect;

/// Which container dimension a percentage is taken against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentageBase {
    Width,
    Height,
}

/// Convert a scalar length, e.g. `100` -> `"100px"`, `25.25` -> `"25.3px"`.
pub fn length(value: f64, is_text: bool, config: &MarkupConfig) -> String {
    format!("{}{}", scaled(value, config.scale), config.unit(is_text))
}

/// Convert a length list (e.g. corner radii), each element scaled and rounded
/// independently, sharing one trailing unit: `[10, 20]` -> `"10px 20px"`.
pub fn lengths(values: &[f64], is_text: bool, config: &MarkupConfig) -> String {
    let unit = config.unit(is_text);
    let joined = values
        .iter()
        .map(|v| scaled(*v, config.scale).to_string())
        .collect::<Vec<_>>()
        .join(&format!("{} ", unit));
    format!("{}{}", joined, unit)
}

/// Express a length as a percentage of a container dimension, rounded to one
/// decimal: `50` of a 200-wide container -> `"25%"`.
pub fn percentage(value: f64, base: PercentageBase, container: &Rect) -> String {
    let dimension = match base {
        PercentageBase::Width => container.width,
        PercentageBase::Height => container.height,
    };
    format!("{}%", (value / dimension * 1000.0).round() / 10.0)
}

/// Full conversion entry point.
///
/// Percentage mode applies only when both a base and a container are given;
/// otherwise the scalar scale-and-unit path runs.
pub fn convert(
    value: f64,
    is_text: bool,
    base: Option<PercentageBase>,
    container: Option<&Rect>,
    config: &MarkupConfig,
) -> String {
    match (base, container) {
        (Some(base), Some(container)) => percentage(value, base, container),
        _ => length(value, is_text, config),
    }
}

fn scaled(value: f64, scale: f64) -> f64 {
    (value / scale * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(scale: f64, units: &str) -> MarkupConfig {
        MarkupConfig {
            scale,
            units: units.to_string(),
            ..MarkupConfig::default()
        }
    }

    #[test]
    fn test_length_identity_scale() {
        assert_eq!(length(100.0, false, &config(1.0, "px")), "100px");
    }

    #[test]
    fn test_length_scales_and_rounds() {
        assert_eq!(length(100.0, false, &config(2.0, "px")), "50px");
        assert_eq!(length(101.0, false, &config(3.0, "px")), "33.7px");
    }

    #[test]
    fn test_length_whole_values_have_no_decimal() {
        assert_eq!(length(30.0, false, &config(2.0, "pt")), "15pt");
    }

    #[test]
    fn test_length_text_unit() {
        let config = config(1.0, "pt/sp");
        assert_eq!(length(16.0, true, &config), "16sp");
        assert_eq!(length(16.0, false, &config), "16pt");
    }

    #[test]
    fn test_lengths_share_trailing_unit() {
        assert_eq!(lengths(&[10.0, 20.0], false, &config(1.0, "px")), "10px 20px");
        assert_eq!(
            lengths(&[4.0, 4.0, 0.0, 0.0], false, &config(1.0, "px")),
            "4px 4px 0px 0px"
        );
    }

    #[test]
    fn test_lengths_single_element() {
        assert_eq!(lengths(&[8.0], false, &config(1.0, "px")), "8px");
    }

    #[test]
    fn test_percentage_of_width() {
        let container = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(percentage(50.0, PercentageBase::Width, &container), "25%");
    }

    #[test]
    fn test_percentage_of_height_rounds_one_decimal() {
        let container = Rect::new(0.0, 0.0, 200.0, 300.0);
        // 100 / 300 = 33.333..% -> 33.3%
        assert_eq!(percentage(100.0, PercentageBase::Height, &container), "33.3%");
    }

    #[test]
    fn test_convert_percentage_bypasses_scale() {
        let container = Rect::new(0.0, 0.0, 200.0, 100.0);
        let config = config(2.0, "px");
        assert_eq!(
            convert(50.0, false, Some(PercentageBase::Width), Some(&container), &config),
            "25%"
        );
    }

    #[test]
    fn test_convert_falls_back_without_container() {
        let config = config(1.0, "px");
        assert_eq!(
            convert(50.0, false, Some(PercentageBase::Width), None, &config),
            "50px"
        );
    }

    #[test]
    fn test_convert_plain() {
        let config = config(1.0, "px");
        assert_eq!(convert(100.0, false, None, None, &config), "100px");
    }
}
