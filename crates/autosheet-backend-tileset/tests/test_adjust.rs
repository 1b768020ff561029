//! End-to-end adjustment tests: template-as-source round trips, resolution
//! mismatch handling, and byte-level determinism.

use autosheet_backend_tileset::adjust::ContentAdjuster;
use autosheet_backend_tileset::color::Color;
use autosheet_backend_tileset::png::{write_rgba_to_vec_with_hash, PngConfig};
use autosheet_backend_tileset::surface::{PixelSurface, Rect};
use autosheet_backend_tileset::template::{self, TemplateConfig};
use autosheet_spec::report::AdjustMode;
use autosheet_spec::template::TileFormat;

fn config(format: TileFormat, tile_size: u32) -> TemplateConfig {
    TemplateConfig {
        tile_format: format,
        tile_size,
        padding: 0,
        offset: 0,
        fill_color: Color::from_hex("#ff8040").unwrap(),
        border_color: Color::from_hex("#40c0ff").unwrap(),
        border_width: 4,
        detailed_colors: None,
    }
}

// ============================================================================
// Round-Trip Tests
// ============================================================================

/// Adjusting a generated template against its own config detects content in
/// every drawn cell and produces an output of exactly the template size.
#[test]
fn test_template_round_trips_through_adjuster() {
    let cfg = config(TileFormat::Tile47, 16);
    let source = template::generate(&cfg);

    let adjuster = ContentAdjuster::new(&cfg);
    let outcome = adjuster.adjust_with_content_detection(&source);

    let dims = template::dimensions(&cfg);
    assert_eq!(outcome.surface.width(), dims.width);
    assert_eq!(outcome.surface.height(), dims.height);
    assert_eq!(outcome.report.mode, AdjustMode::Normalized);
    assert_eq!(outcome.report.tiles.len(), 48);

    // 47 drawn cells have content; the 48th grid cell is empty.
    let detected = outcome
        .report
        .tiles
        .iter()
        .filter(|t| t.detected.is_some())
        .count();
    assert_eq!(detected, 47);
    assert!(outcome.report.tiles[47].detected.is_none());
}

/// Template cells fill their tiles exactly, so adjusting a template against
/// itself is the identity on scale.
#[test]
fn test_full_cells_keep_unit_scale() {
    let cfg = config(TileFormat::Tile16, 16);
    let source = template::generate(&cfg);

    let outcome = ContentAdjuster::new(&cfg).adjust(&source);
    for tile in &outcome.report.tiles {
        let detected = tile.detected.expect("every 16-format cell is drawn");
        assert_eq!((detected.width, detected.height), (16, 16));
        assert_eq!(tile.scale, [1.0, 1.0]);
        assert_eq!(tile.offset, [0.0, 0.0]);
    }
}

// ============================================================================
// Resolution Mismatch Tests
// ============================================================================

/// A source rendered at twice the template resolution maps each cell back
/// onto the template grid.
#[test]
fn test_double_resolution_source_lands_on_grid() {
    let cfg = config(TileFormat::Tile16, 16);

    // Render the same layout at double size to play the "high-res AI
    // output" role.
    let big = config(TileFormat::Tile16, 32);
    let source = template::generate(&big);

    let adjuster = ContentAdjuster::new(&cfg);
    let outcome = adjuster.adjust(&source);

    for (i, tile) in outcome.report.tiles.iter().enumerate() {
        // Estimated rects are the scaled-up cells.
        assert_eq!(tile.original.width, 32, "tile {i}");
        assert_eq!(tile.original.height, 32, "tile {i}");
        let detected = tile.detected.expect("cells are drawn");
        // Full 32x32 content scaled down to fill the 16px tile.
        assert_eq!((detected.width, detected.height), (32, 32));
        assert_eq!(tile.scale, [0.5, 0.5]);
    }

    // Output is template-sized, not source-sized.
    assert_eq!(outcome.surface.width(), 64);
}

/// Estimation clamps to the source even when the source is much smaller
/// than the template.
#[test]
fn test_undersized_source_does_not_panic() {
    let cfg = config(TileFormat::Platformer, 32);
    let source = PixelSurface::new(7, 7);

    let outcome = ContentAdjuster::new(&cfg).adjust(&source);
    assert_eq!(outcome.report.tiles.len(), 49);
    for tile in &outcome.report.tiles {
        assert!(tile.original.x < 7);
        assert!(tile.original.y < 7);
        assert!(tile.original.width >= 1);
        assert!(tile.original.x + tile.original.width <= 7);
    }
}

// ============================================================================
// Determinism Tests
// ============================================================================

/// Two runs over the same source produce byte-identical PNGs and identical
/// adjustment sequences.
#[test]
fn test_adjustment_is_deterministic() {
    let cfg = config(TileFormat::Tile16, 16);

    let mut source = PixelSurface::new(64, 64);
    source.fill_rect(Rect::new(2, 3, 10, 9), Color::rgb(10, 200, 30));
    source.fill_rect(Rect::new(18, 20, 12, 7), Color::rgba(90, 10, 250, 200));
    source.fill_rect(Rect::new(40, 5, 3, 3), Color::rgb(0, 0, 0));

    let adjuster = ContentAdjuster::new(&cfg);
    let png_config = PngConfig::default();

    let first = adjuster.adjust_with_content_detection(&source);
    let second = adjuster.adjust_with_content_detection(&source);

    let (_, hash1) = write_rgba_to_vec_with_hash(&first.surface, &png_config).unwrap();
    let (_, hash2) = write_rgba_to_vec_with_hash(&second.surface, &png_config).unwrap();

    assert_eq!(hash1, hash2, "output PNGs should be byte-identical");
    assert_eq!(first.report, second.report);
}

/// Single-pass and normalized modes are distinct strategies: a sheet with
/// mixed content sizes scales differently under each.
#[test]
fn test_modes_differ_on_mixed_content() {
    let cfg = config(TileFormat::Tile16, 32);

    let mut source = PixelSurface::new(128, 128);
    source.fill_rect(Rect::new(2, 2, 4, 4), Color::rgb(255, 0, 0)); // tiny
    source.fill_rect(Rect::new(34, 2, 28, 28), Color::rgb(0, 255, 0)); // large

    let adjuster = ContentAdjuster::new(&cfg);
    let single = adjuster.adjust(&source);
    let normalized = adjuster.adjust_with_content_detection(&source);

    // Single-pass blows the tiny cell up to fill its tile.
    assert_eq!(single.report.tiles[0].scale[0], 8.0);
    // Normalized mode damps it to the shared average-derived scale.
    assert!(normalized.report.tiles[0].scale[0] < 8.0);
    assert_eq!(single.report.mode, AdjustMode::Single);
    assert_eq!(normalized.report.mode, AdjustMode::Normalized);
}
