//! Content-aware sheet adjustment.
//!
//! Takes a source image that approximates a rendering of the template grid
//! (possibly at a different resolution, with positional drift from
//! image-generation noise) and produces a new surface strictly sized to the
//! template, with each cell's opaque content detected, uniformly rescaled,
//! and centered in its tile.
//!
//! Two strategies share one cell loop: per-cell scaling fills every tile
//! independently, while the normalized (global-average) strategy derives a
//! single scale from the mean detected content size so that incidental
//! cropping noise does not make tiles render at visibly different sizes.

use autosheet_spec::report::{AdjustMode, AdjustmentReport, PlacedRect, SourceRect, TileAdjustment};

use crate::surface::{PixelSurface, Rect, DEFAULT_ALPHA_THRESHOLD};
use crate::template::{self, TemplateConfig};

/// Result of an adjustment run: the output surface plus the full report.
#[derive(Debug)]
pub struct AdjustmentOutcome {
    /// Output image, sized exactly to the template dimensions.
    pub surface: PixelSurface,
    /// Per-cell diagnostics.
    pub report: AdjustmentReport,
}

/// How per-cell scale is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScaleMode {
    /// Each cell scaled independently to fill its tile.
    PerCell,
    /// All cells share a scale from the average detected size, clamped so
    /// no cell exceeds its tile.
    GlobalAverage,
}

/// Adjusts sprite sheets onto the grid described by a template config.
#[derive(Debug)]
pub struct ContentAdjuster<'a> {
    config: &'a TemplateConfig,
}

impl<'a> ContentAdjuster<'a> {
    pub fn new(config: &'a TemplateConfig) -> Self {
        Self { config }
    }

    /// Single-pass adjustment: every detected cell is independently scaled
    /// to fill its tile (aspect preserved) and centered.
    pub fn adjust(&self, source: &PixelSurface) -> AdjustmentOutcome {
        self.run(source, ScaleMode::PerCell, AdjustMode::Single)
    }

    /// Two-pass adjustment: detection first, then a shared scale derived
    /// from the average detected content size. Cells whose bounding box is
    /// accidentally small (a thin sliver survives cropping noise) are not
    /// over-amplified the way independent scaling would.
    pub fn adjust_with_content_detection(&self, source: &PixelSurface) -> AdjustmentOutcome {
        self.run(source, ScaleMode::GlobalAverage, AdjustMode::Normalized)
    }

    /// Expected position and size of a cell in source-image space. The
    /// theoretical cell rect is scaled by the source/template size ratio on
    /// each axis (tolerating sources rendered at other resolutions), then
    /// clamped fully inside the source.
    pub fn estimate_source_cell_rect(
        &self,
        source: &PixelSurface,
        index: u32,
        cols: u32,
    ) -> Rect {
        let cfg = self.config;
        let dims = template::dimensions(cfg);

        let col = index % cols;
        let row = index / cols;

        let source_width = source.width();
        let source_height = source.height();

        let scale_x = source_width as f64 / dims.width as f64;
        let scale_y = source_height as f64 / dims.height as f64;

        let step = (cfg.tile_size + cfg.padding) as f64;
        let x = ((cfg.offset as f64 + col as f64 * step) * scale_x).round() as i64;
        let y = ((cfg.offset as f64 + row as f64 * step) * scale_y).round() as i64;
        let width = (cfg.tile_size as f64 * scale_x).round() as i64;
        let height = (cfg.tile_size as f64 * scale_y).round() as i64;

        let clamped_x = x.clamp(0, source_width.saturating_sub(1) as i64) as u32;
        let clamped_y = y.clamp(0, source_height.saturating_sub(1) as i64) as u32;
        let clamped_width = width.clamp(1, (source_width - clamped_x).max(1) as i64) as u32;
        let clamped_height = height.clamp(1, (source_height - clamped_y).max(1) as i64) as u32;

        Rect::new(clamped_x, clamped_y, clamped_width, clamped_height)
    }

    fn run(&self, source: &PixelSurface, mode: ScaleMode, report_mode: AdjustMode) -> AdjustmentOutcome {
        let cfg = self.config;
        let dims = template::dimensions(cfg);
        let ts = cfg.tile_size;
        let ts_f = ts as f64;
        let total = dims.cols * dims.rows;

        let mut out = PixelSurface::new(dims.width, dims.height);
        let mut tiles = Vec::with_capacity(total as usize);

        // First pass (global-average mode only): mean detected content size
        // over all cells that have any. Falls back to the tile size when the
        // sheet is entirely empty.
        let base_scale = match mode {
            ScaleMode::PerCell => None,
            ScaleMode::GlobalAverage => {
                let mut width_sum = 0.0;
                let mut height_sum = 0.0;
                let mut count = 0u32;
                for index in 0..total {
                    let rect = self.estimate_source_cell_rect(source, index, dims.cols);
                    if let Some(bounds) =
                        source.detect_content_bounds(rect, DEFAULT_ALPHA_THRESHOLD)
                    {
                        width_sum += bounds.width() as f64;
                        height_sum += bounds.height() as f64;
                        count += 1;
                    }
                }
                let (avg_width, avg_height) = if count > 0 {
                    (width_sum / count as f64, height_sum / count as f64)
                } else {
                    (ts_f, ts_f)
                };
                Some((ts_f / avg_width).min(ts_f / avg_height))
            }
        };

        for index in 0..total {
            let col = index % dims.cols;
            let row = index / dims.cols;
            let target_x = cfg.offset + col * (ts + cfg.padding);
            let target_y = cfg.offset + row * (ts + cfg.padding);

            let source_rect = self.estimate_source_cell_rect(source, index, dims.cols);
            let bounds = source.detect_content_bounds(source_rect, DEFAULT_ALPHA_THRESHOLD);

            let adjustment = match bounds {
                Some(bounds) => {
                    let detected = Rect::new(
                        source_rect.x + bounds.min_x,
                        source_rect.y + bounds.min_y,
                        bounds.width(),
                        bounds.height(),
                    );
                    let (dw, dh) = (detected.width as f64, detected.height as f64);

                    let scale = match base_scale {
                        // Fill the tile, aspect preserved.
                        None => (ts_f / dw).min(ts_f / dh),
                        // Shared scale, clamped so this cell stays inside
                        // its tile.
                        Some(base) => {
                            let final_width = (dw * base).min(ts_f);
                            let final_height = (dh * base).min(ts_f);
                            (final_width / dw).min(final_height / dh)
                        }
                    };

                    let adjusted_width = dw * scale;
                    let adjusted_height = dh * scale;
                    let offset_x = (ts_f - adjusted_width) / 2.0;
                    let offset_y = (ts_f - adjusted_height) / 2.0;

                    let dst = Rect::new(
                        target_x + offset_x.round() as u32,
                        target_y + offset_y.round() as u32,
                        (adjusted_width.round() as u32).max(1),
                        (adjusted_height.round() as u32).max(1),
                    );
                    out.blit(source, detected, dst);

                    TileAdjustment {
                        index,
                        original: record(source_rect),
                        detected: Some(record(detected)),
                        adjusted: PlacedRect {
                            x: target_x as f64 + offset_x,
                            y: target_y as f64 + offset_y,
                            width: adjusted_width,
                            height: adjusted_height,
                        },
                        scale: [scale, scale],
                        offset: [offset_x, offset_y],
                    }
                }
                None => {
                    // Nothing detected: copy the estimated region verbatim
                    // into the full target cell.
                    out.blit(source, source_rect, Rect::new(target_x, target_y, ts, ts));

                    TileAdjustment {
                        index,
                        original: record(source_rect),
                        detected: None,
                        adjusted: PlacedRect {
                            x: target_x as f64,
                            y: target_y as f64,
                            width: ts_f,
                            height: ts_f,
                        },
                        scale: [1.0, 1.0],
                        offset: [0.0, 0.0],
                    }
                }
            };

            tiles.push(adjustment);
        }

        AdjustmentOutcome {
            surface: out,
            report: AdjustmentReport {
                mode: report_mode,
                template_width: dims.width,
                template_height: dims.height,
                cols: dims.cols,
                rows: dims.rows,
                source_width: source.width(),
                source_height: source.height(),
                tiles,
            },
        }
    }
}

fn record(rect: Rect) -> SourceRect {
    SourceRect {
        x: rect.x,
        y: rect.y,
        width: rect.width,
        height: rect.height,
    }
}
