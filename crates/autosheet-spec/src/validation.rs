//! Template spec validation.
//!
//! Validation runs at the interface layer (CLI or other frontends) before a
//! spec is resolved into a renderer config. The rendering backend itself
//! trusts its config: degenerate values produce degenerate images, never
//! panics, so anything a frontend wants rejected must be rejected here.

use crate::error::{ErrorCode, ValidationError};
use crate::template::{DetailedColorsSpec, TemplateSpec};

/// Check a raw template spec before resolving it into a renderer config.
///
/// Returns all failures at once rather than stopping at the first, so a
/// frontend can report them together. A `BorderTooWide` failure is commonly
/// handled by clamping rather than rejecting.
pub fn validate_template_spec(spec: &TemplateSpec) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if spec.tile_size == 0 {
        errors.push(ValidationError::new(
            ErrorCode::ZeroTileSize,
            "tile_size must be at least 1",
        ));
    }

    check_color(&mut errors, "fill_color", &spec.fill_color);
    check_color(&mut errors, "border_color", &spec.border_color);
    if let Some(colors) = &spec.detailed_colors {
        check_detailed_colors(&mut errors, colors);
    }

    if spec.tile_size > 0 && spec.border_width > spec.tile_size / 2 {
        errors.push(ValidationError::new(
            ErrorCode::BorderTooWide,
            format!(
                "border_width {} exceeds half the tile size ({})",
                spec.border_width,
                spec.tile_size / 2
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_detailed_colors(errors: &mut Vec<ValidationError>, colors: &DetailedColorsSpec) {
    check_color(errors, "detailed_colors.top", &colors.top);
    check_color(errors, "detailed_colors.bottom", &colors.bottom);
    check_color(errors, "detailed_colors.left", &colors.left);
    check_color(errors, "detailed_colors.right", &colors.right);
    check_color(errors, "detailed_colors.corner", &colors.corner);
}

fn check_color(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if !is_hex_color(value) {
        errors.push(ValidationError::new(
            ErrorCode::InvalidColor,
            format!("{field}: '{value}' is not a #rrggbb or #rrggbbaa color"),
        ));
    }
}

/// Accepts `#rrggbb` / `#rrggbbaa`, with the leading `#` optional.
fn is_hex_color(value: &str) -> bool {
    let digits = value.strip_prefix('#').unwrap_or(value);
    matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TileFormat;

    fn base_spec() -> TemplateSpec {
        serde_json::from_str(r#"{ "tile_format": "16" }"#).unwrap()
    }

    fn codes(spec: &TemplateSpec) -> Vec<ErrorCode> {
        match validate_template_spec(spec) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.into_iter().map(|e| e.code).collect(),
        }
    }

    #[test]
    fn default_spec_is_valid() {
        assert!(validate_template_spec(&base_spec()).is_ok());
    }

    #[test]
    fn zero_tile_size_is_rejected() {
        let mut spec = base_spec();
        spec.tile_size = 0;
        assert_eq!(codes(&spec), vec![ErrorCode::ZeroTileSize]);
    }

    #[test]
    fn bad_hex_color_is_rejected() {
        let mut spec = base_spec();
        spec.fill_color = "#zzzzzz".to_string();
        assert_eq!(codes(&spec), vec![ErrorCode::InvalidColor]);

        spec.fill_color = "#fff".to_string();
        assert_eq!(codes(&spec), vec![ErrorCode::InvalidColor]);
    }

    #[test]
    fn hash_prefix_is_optional() {
        let mut spec = base_spec();
        spec.fill_color = "ff8040".to_string();
        spec.border_color = "00112233".to_string();
        assert!(validate_template_spec(&spec).is_ok());
    }

    #[test]
    fn wide_border_is_flagged() {
        let mut spec = base_spec();
        spec.tile_size = 16;
        spec.border_width = 9;
        assert_eq!(codes(&spec), vec![ErrorCode::BorderTooWide]);

        spec.border_width = 8;
        assert!(validate_template_spec(&spec).is_ok());
    }

    #[test]
    fn detailed_colors_are_checked_individually() {
        let mut spec = base_spec();
        spec.detailed_colors = Some(DetailedColorsSpec {
            top: "#ff0000".to_string(),
            bottom: "oops".to_string(),
            left: "#0000ff".to_string(),
            right: "#ffff00".to_string(),
            corner: "also bad".to_string(),
        });
        assert_eq!(
            codes(&spec),
            vec![ErrorCode::InvalidColor, ErrorCode::InvalidColor]
        );
    }

    #[test]
    fn failures_accumulate() {
        let spec: TemplateSpec = serde_json::from_str(
            r#"{
                "tile_format": "platformer",
                "tile_size": 0,
                "fill_color": "nope"
            }"#,
        )
        .unwrap();
        assert_eq!(spec.tile_format, TileFormat::Platformer);

        let errors = validate_template_spec(&spec).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
