//! Template info command.

use std::process::ExitCode;

use anyhow::Result;
use autosheet_backend_tileset::template;

/// Run the info command: print the grid geometry for a spec.
pub fn run(spec_path: &str, json: bool) -> Result<ExitCode> {
    let mut spec = super::load_spec(spec_path)?;
    let config = super::resolve_config(&mut spec)?;
    let dims = template::dimensions(&config);

    if json {
        let value = serde_json::json!({
            "format": config.tile_format.label(),
            "width": dims.width,
            "height": dims.height,
            "cols": dims.cols,
            "rows": dims.rows,
            "tile_size": config.tile_size,
            "padding": config.padding,
            "offset": config.offset,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("format:  {}", config.tile_format.label());
        println!("grid:    {} x {} cells", dims.cols, dims.rows);
        println!("canvas:  {} x {} px", dims.width, dims.height);
        println!(
            "tile:    {} px ({} padding, {} offset)",
            config.tile_size, config.padding, config.offset
        );
    }

    Ok(ExitCode::SUCCESS)
}
