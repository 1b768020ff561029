//! CLI command implementations.

pub mod adjust;
pub mod info;
pub mod template;

use anyhow::{bail, Context, Result};
use autosheet_backend_tileset::template::TemplateConfig;
use autosheet_spec::error::ErrorCode;
use autosheet_spec::template::TemplateSpec;
use autosheet_spec::validation::validate_template_spec;
use colored::Colorize;

/// Load and parse a template spec file.
pub(crate) fn load_spec(path: &str) -> Result<TemplateSpec> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading template spec '{path}'"))?;
    let spec: TemplateSpec =
        serde_json::from_str(&text).with_context(|| format!("parsing template spec '{path}'"))?;
    Ok(spec)
}

/// Validate a spec and resolve it into a renderer config.
///
/// An oversized border width is clamped with a warning rather than
/// rejected; everything else fails the command.
pub(crate) fn resolve_config(spec: &mut TemplateSpec) -> Result<TemplateConfig> {
    if let Err(errors) = validate_template_spec(spec) {
        let mut fatal = Vec::new();
        for err in errors {
            if err.code == ErrorCode::BorderTooWide {
                let clamped = spec.tile_size / 2;
                eprintln!(
                    "{} border_width {} exceeds half the tile size, clamping to {}",
                    "warning:".yellow().bold(),
                    spec.border_width,
                    clamped
                );
                spec.border_width = clamped;
            } else {
                fatal.push(err);
            }
        }
        if !fatal.is_empty() {
            let lines: Vec<String> = fatal.iter().map(|e| e.to_string()).collect();
            bail!("invalid template spec:\n  {}", lines.join("\n  "));
        }
    }

    Ok(TemplateConfig::from_spec(spec)?)
}
