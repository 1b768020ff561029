//! Sheet adjustment command.

use std::process::ExitCode;

use anyhow::{Context, Result};
use autosheet_backend_tileset::adjust::ContentAdjuster;
use autosheet_backend_tileset::png::{write_rgba_to_vec_with_hash, PngConfig};
use autosheet_backend_tileset::surface::PixelSurface;
use colored::Colorize;

/// Run the adjust command.
///
/// # Arguments
/// * `spec_path` - Path to the template spec file
/// * `input` - Path to the sprite sheet to adjust
/// * `out` - Output PNG path (optional)
/// * `mode` - "single" (per-cell scaling) or "normalized" (average scaling)
/// * `report` - Optional path for the JSON adjustment report
pub fn run(
    spec_path: &str,
    input: &str,
    out: Option<&str>,
    mode: &str,
    report: Option<&str>,
) -> Result<ExitCode> {
    let mut spec = super::load_spec(spec_path)?;
    let config = super::resolve_config(&mut spec)?;

    let decoded = image::open(input)
        .with_context(|| format!("loading sprite sheet '{input}'"))?
        .to_rgba8();
    let (width, height) = decoded.dimensions();
    let source = PixelSurface::from_rgba8(width, height, decoded.into_raw())?;

    let adjuster = ContentAdjuster::new(&config);
    let outcome = match mode {
        "single" => adjuster.adjust(&source),
        _ => adjuster.adjust_with_content_detection(&source),
    };

    let out_path = match out {
        Some(path) => path.to_string(),
        None => format!("sprite_adjusted_{}tiles.png", config.tile_format.label()),
    };

    let (data, hash) = write_rgba_to_vec_with_hash(&outcome.surface, &PngConfig::default())?;
    std::fs::write(&out_path, &data).with_context(|| format!("writing '{out_path}'"))?;

    let detected = outcome
        .report
        .tiles
        .iter()
        .filter(|tile| tile.detected.is_some())
        .count();
    println!(
        "{} {} ({} cells, {} with content, blake3 {})",
        "wrote".green().bold(),
        out_path,
        outcome.report.tiles.len(),
        detected,
        &hash[..16]
    );

    if let Some(report_path) = report {
        let json = serde_json::to_string_pretty(&outcome.report)?;
        std::fs::write(report_path, json)
            .with_context(|| format!("writing report '{report_path}'"))?;
        println!("{} {}", "wrote".green().bold(), report_path);
    }

    Ok(ExitCode::SUCCESS)
}
