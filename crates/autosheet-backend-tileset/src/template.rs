//! Template rendering.
//!
//! Turns a resolved [`TemplateConfig`] into a sheet image: autotile cells
//! drawn from their edge masks (border suppression on connected edges), or
//! platformer cells drawn from their slope descriptors. [`dimensions`] is
//! the single source of truth for grid geometry; the adjuster and frontends
//! derive cell placement from it rather than recomputing.

use autosheet_spec::template::{TemplateSpec, TileFormat};
use thiserror::Error;

use crate::color::{Color, ColorParseError};
use crate::layout::{self, PlatformerCell, PlatformerTile, SolidKind, TileEdgeMask, PLATFORMER_LAYOUT};
use crate::surface::{PixelSurface, Rect};

/// Errors from resolving a raw spec into a renderer config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field}: {source}")]
    InvalidColor {
        field: &'static str,
        source: ColorParseError,
    },
}

/// Resolved per-edge border colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderColors {
    pub top: Color,
    pub bottom: Color,
    pub left: Color,
    pub right: Color,
    pub corner: Color,
}

/// Which border a stripe color is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePosition {
    Top,
    Bottom,
    Left,
    Right,
    Corner,
}

/// Resolved template configuration consumed by the renderer and adjuster.
///
/// The core trusts these values: `border_width <= tile_size / 2` is a caller
/// contract (frontends clamp before constructing), and out-of-range values
/// produce visually degenerate but non-crashing output.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateConfig {
    pub tile_format: TileFormat,
    pub tile_size: u32,
    pub padding: u32,
    pub offset: u32,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: u32,
    pub detailed_colors: Option<BorderColors>,
}

impl TemplateConfig {
    /// Resolve a raw spec document, parsing its hex colors. This is the only
    /// fallible step between a spec file and a rendered sheet.
    pub fn from_spec(spec: &TemplateSpec) -> Result<Self, ConfigError> {
        let parse = |field: &'static str, value: &str| {
            Color::from_hex(value).map_err(|source| ConfigError::InvalidColor { field, source })
        };

        let detailed_colors = match &spec.detailed_colors {
            Some(colors) => Some(BorderColors {
                top: parse("detailed_colors.top", &colors.top)?,
                bottom: parse("detailed_colors.bottom", &colors.bottom)?,
                left: parse("detailed_colors.left", &colors.left)?,
                right: parse("detailed_colors.right", &colors.right)?,
                corner: parse("detailed_colors.corner", &colors.corner)?,
            }),
            None => None,
        };

        Ok(Self {
            tile_format: spec.tile_format,
            tile_size: spec.tile_size,
            padding: spec.padding,
            offset: spec.offset,
            fill_color: parse("fill_color", &spec.fill_color)?,
            border_color: parse("border_color", &spec.border_color)?,
            border_width: spec.border_width,
            detailed_colors,
        })
    }

    /// Border color for an edge position: the detailed per-edge color when
    /// detailed mode is on, the single border color otherwise.
    pub fn border_color_for(&self, edge: EdgePosition) -> Color {
        match &self.detailed_colors {
            Some(colors) => match edge {
                EdgePosition::Top => colors.top,
                EdgePosition::Bottom => colors.bottom,
                EdgePosition::Left => colors.left,
                EdgePosition::Right => colors.right,
                EdgePosition::Corner => colors.corner,
            },
            None => self.border_color,
        }
    }
}

/// Grid geometry of a template sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDimensions {
    pub width: u32,
    pub height: u32,
    pub cols: u32,
    pub rows: u32,
}

/// Compute the sheet geometry for a config. Pure; every component that
/// needs cell placement derives it from this.
pub fn dimensions(config: &TemplateConfig) -> TemplateDimensions {
    let (cols, rows) = config.tile_format.grid_size();
    TemplateDimensions {
        width: config.offset + cols * (config.tile_size + config.padding),
        height: config.offset + rows * (config.tile_size + config.padding),
        cols,
        rows,
    }
}

/// Render the template sheet for a config.
pub fn generate(config: &TemplateConfig) -> PixelSurface {
    let dims = dimensions(config);
    let mut surface = PixelSurface::new(dims.width, dims.height);

    match config.tile_format {
        TileFormat::Platformer => {
            for cell in &PLATFORMER_LAYOUT {
                draw_platformer_tile(&mut surface, config, cell);
            }
        }
        TileFormat::Tile16 | TileFormat::Tile47 => {
            let edges = layout::edge_table(config.tile_format)
                .unwrap_or(&[]);
            for (i, &mask) in edges.iter().enumerate() {
                let col = i as u32 % dims.cols;
                let row = i as u32 / dims.cols;
                let x = config.offset + col * (config.tile_size + config.padding);
                let y = config.offset + row * (config.tile_size + config.padding);
                draw_autotile_cell(&mut surface, config, x, y, mask);
            }
        }
    }

    surface
}

/// Overlay semi-transparent 1px grid lines at every column and row
/// boundary, skipping lines outside the surface. Preview only; `generate`
/// never calls this.
pub fn draw_grid(surface: &mut PixelSurface, config: &TemplateConfig) {
    let dims = dimensions(config);
    let grid_color = Color::rgba(128, 128, 128, 180);
    let (width, height) = (surface.width(), surface.height());
    if width == 0 || height == 0 {
        return;
    }

    for i in 0..=dims.cols {
        let x = config.offset + i * (config.tile_size + config.padding);
        if x < width {
            surface.draw_line(x, 0, x, height - 1, grid_color);
        }
    }
    for i in 0..=dims.rows {
        let y = config.offset + i * (config.tile_size + config.padding);
        if y < height {
            surface.draw_line(0, y, width - 1, y, grid_color);
        }
    }
}

fn draw_autotile_cell(
    surface: &mut PixelSurface,
    config: &TemplateConfig,
    x: u32,
    y: u32,
    mask: TileEdgeMask,
) {
    let ts = config.tile_size;
    // Oversized borders render degenerately rather than underflowing.
    let bw = config.border_width.min(ts);

    surface.fill_rect(Rect::new(x, y, ts, ts), config.fill_color);

    if !mask.contains(TileEdgeMask::TOP) {
        let color = config.border_color_for(EdgePosition::Top);
        surface.fill_rect(Rect::new(x, y, ts, bw), color);
    }
    if !mask.contains(TileEdgeMask::RIGHT) {
        let color = config.border_color_for(EdgePosition::Right);
        surface.fill_rect(Rect::new(x + ts - bw, y, bw, ts), color);
    }
    if !mask.contains(TileEdgeMask::BOTTOM) {
        let color = config.border_color_for(EdgePosition::Bottom);
        surface.fill_rect(Rect::new(x, y + ts - bw, ts, bw), color);
    }
    if !mask.contains(TileEdgeMask::LEFT) {
        let color = config.border_color_for(EdgePosition::Left);
        surface.fill_rect(Rect::new(x, y, bw, ts), color);
    }

    let corner = config.border_color_for(EdgePosition::Corner);

    // Outer corners: repaint where two stripes overlapped.
    if !mask.contains(TileEdgeMask::TOP) && !mask.contains(TileEdgeMask::LEFT) {
        surface.fill_rect(Rect::new(x, y, bw, bw), corner);
    }
    if !mask.contains(TileEdgeMask::TOP) && !mask.contains(TileEdgeMask::RIGHT) {
        surface.fill_rect(Rect::new(x + ts - bw, y, bw, bw), corner);
    }
    if !mask.contains(TileEdgeMask::BOTTOM) && !mask.contains(TileEdgeMask::RIGHT) {
        surface.fill_rect(Rect::new(x + ts - bw, y + ts - bw, bw, bw), corner);
    }
    if !mask.contains(TileEdgeMask::BOTTOM) && !mask.contains(TileEdgeMask::LEFT) {
        surface.fill_rect(Rect::new(x, y + ts - bw, bw, bw), corner);
    }

    // Inner corners only exist in the 47 format: both cardinals connected
    // but the diagonal is not.
    if config.tile_format == TileFormat::Tile47 {
        if mask.contains(TileEdgeMask::TOP | TileEdgeMask::LEFT)
            && !mask.contains(TileEdgeMask::TOP_LEFT)
        {
            surface.fill_rect(Rect::new(x, y, bw, bw), corner);
        }
        if mask.contains(TileEdgeMask::TOP | TileEdgeMask::RIGHT)
            && !mask.contains(TileEdgeMask::TOP_RIGHT)
        {
            surface.fill_rect(Rect::new(x + ts - bw, y, bw, bw), corner);
        }
        if mask.contains(TileEdgeMask::BOTTOM | TileEdgeMask::RIGHT)
            && !mask.contains(TileEdgeMask::BOTTOM_RIGHT)
        {
            surface.fill_rect(Rect::new(x + ts - bw, y + ts - bw, bw, bw), corner);
        }
        if mask.contains(TileEdgeMask::BOTTOM | TileEdgeMask::LEFT)
            && !mask.contains(TileEdgeMask::BOTTOM_LEFT)
        {
            surface.fill_rect(Rect::new(x, y + ts - bw, bw, bw), corner);
        }
    }
}

fn draw_platformer_tile(surface: &mut PixelSurface, config: &TemplateConfig, cell: &PlatformerCell) {
    let ts = config.tile_size;
    let x = config.offset + cell.col * (ts + config.padding);
    let y = config.offset + cell.row * (ts + config.padding);
    let fill = config.fill_color;

    match cell.tile {
        PlatformerTile::Solid(kind) => {
            let half = ts - ts / 2;
            let rect = match kind {
                SolidKind::Floor => Rect::new(x, y + ts / 2, ts, half),
                SolidKind::Ceiling => Rect::new(x, y, ts, half),
                SolidKind::WallLeft => Rect::new(x, y, half, ts),
                SolidKind::WallRight => Rect::new(x + ts / 2, y, half, ts),
            };
            surface.fill_rect(rect, fill);
        }
        PlatformerTile::Ramp {
            angle_deg,
            flip_h,
            flip_v,
        } => {
            let rise = layout::ramp_rise(angle_deg, ts);
            let heights = layout::column_heights(ts, 0.0, rise, flip_h);
            fill_profile(surface, x, y, ts, &heights, flip_v, fill);
        }
        PlatformerTile::Level { angle_deg, ceiling } => {
            let height = layout::ramp_rise(angle_deg, ts).round() as u32;
            fill_level(surface, x, y, ts, height.min(ts), ceiling, fill);
        }
        PlatformerTile::LevelFraction { fraction, ceiling } => {
            let height = (ts as f64 * fraction).round().max(0.0) as u32;
            fill_level(surface, x, y, ts, height.min(ts), ceiling, fill);
        }
        PlatformerTile::Slope {
            divisions,
            step,
            flip_h,
            flip_v,
        } => {
            let (h0, h1) = layout::slope_span(divisions, step, ts);
            let heights = layout::column_heights(ts, h0, h1, flip_h);
            fill_profile(surface, x, y, ts, &heights, flip_v, fill);
        }
    }
}

/// Fill each tile column to its profile height, anchored to the bottom edge
/// (or the top edge for ceiling tiles).
fn fill_profile(
    surface: &mut PixelSurface,
    x: u32,
    y: u32,
    ts: u32,
    heights: &[u32],
    ceiling: bool,
    color: Color,
) {
    for (i, &h) in heights.iter().enumerate() {
        if h == 0 {
            continue;
        }
        let cx = x + i as u32;
        let rect = if ceiling {
            Rect::new(cx, y, 1, h)
        } else {
            Rect::new(cx, y + ts - h, 1, h)
        };
        surface.fill_rect(rect, color);
    }
}

fn fill_level(
    surface: &mut PixelSurface,
    x: u32,
    y: u32,
    ts: u32,
    height: u32,
    ceiling: bool,
    color: Color,
) {
    if height == 0 {
        return;
    }
    let rect = if ceiling {
        Rect::new(x, y, ts, height)
    } else {
        Rect::new(x, y + ts - height, ts, height)
    };
    surface.fill_rect(rect, color);
}
