//! Adjustment report types.
//!
//! When the backend reconciles an external sprite sheet against a template
//! grid it records what it did to every cell. The report is diagnostic
//! output only — nothing reads it back into the adjustment algorithms — but
//! frontends surface it to users (the CLI writes it as JSON on request).

use serde::{Deserialize, Serialize};

/// Which scaling strategy an adjustment run used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustMode {
    /// Each cell scaled independently to fill its tile.
    Single,
    /// All cells share one scale derived from the average detected size.
    Normalized,
}

/// Integer rectangle in source-image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Sub-pixel rectangle describing where content was placed in the output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// What happened to one grid cell during an adjustment pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileAdjustment {
    /// Linear cell index in row-major grid order.
    pub index: u32,
    /// The estimated source region the cell was read from.
    pub original: SourceRect,
    /// Tight bounds of the opaque content found in that region, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected: Option<SourceRect>,
    /// Where the content landed in the output image.
    pub adjusted: PlacedRect,
    /// Uniform scale applied on each axis (always equal; kept as a pair
    /// for report readability).
    pub scale: [f64; 2],
    /// Centering offset within the target cell.
    pub offset: [f64; 2],
}

/// Full per-sheet adjustment report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentReport {
    /// Scaling strategy that produced this report.
    pub mode: AdjustMode,
    /// Output (template) image width in pixels.
    pub template_width: u32,
    /// Output (template) image height in pixels.
    pub template_height: u32,
    /// Grid columns.
    pub cols: u32,
    /// Grid rows.
    pub rows: u32,
    /// Source image width in pixels.
    pub source_width: u32,
    /// Source image height in pixels.
    pub source_height: u32,
    /// One record per grid cell, in index order.
    pub tiles: Vec<TileAdjustment>,
}
