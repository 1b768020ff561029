//! Template generation command.

use std::process::ExitCode;

use anyhow::{Context, Result};
use autosheet_backend_tileset::png::{write_rgba_to_vec_with_hash, PngConfig};
use autosheet_backend_tileset::template;
use colored::Colorize;

/// Run the template command.
///
/// # Arguments
/// * `spec_path` - Path to the template spec file
/// * `out` - Output PNG path (optional)
/// * `grid` - Overlay grid lines on the output
pub fn run(spec_path: &str, out: Option<&str>, grid: bool) -> Result<ExitCode> {
    let mut spec = super::load_spec(spec_path)?;
    let config = super::resolve_config(&mut spec)?;
    let dims = template::dimensions(&config);

    let mut surface = template::generate(&config);
    if grid {
        template::draw_grid(&mut surface, &config);
    }

    let out_path = match out {
        Some(path) => path.to_string(),
        None => format!("sprite_template_{}tiles.png", config.tile_format.label()),
    };

    let (data, hash) = write_rgba_to_vec_with_hash(&surface, &PngConfig::default())?;
    std::fs::write(&out_path, &data).with_context(|| format!("writing '{out_path}'"))?;

    println!(
        "{} {} ({}x{} px, {}x{} cells, blake3 {})",
        "wrote".green().bold(),
        out_path,
        dims.width,
        dims.height,
        dims.cols,
        dims.rows,
        &hash[..16]
    );
    Ok(ExitCode::SUCCESS)
}
