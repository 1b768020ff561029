//! Autosheet Tileset Generation Backend
//!
//! This crate renders autotile sprite-sheet templates and reconciles
//! externally produced sprite sheets against the template grid. Everything
//! is a synchronous transform over in-memory rasters: a resolved
//! [`template::TemplateConfig`] fully determines the generated sheet, and
//! adjustment runs are byte-identical for identical inputs.
//!
//! # Features
//!
//! - **Layout tables**: the canonical 16- and 47-tile edge-mask orderings
//!   and the 7x7 platformer slope sheet, as pure const data
//! - **Template rendering**: border-suppression drawing from edge masks,
//!   polygon fills for slope tiles, grid-overlay previews
//! - **Content adjustment**: per-cell bounding-box detection with
//!   single-pass or average-normalized rescaling and centering
//! - **Deterministic PNG**: fixed compression settings for byte-identical
//!   output, hashable with BLAKE3
//!
//! # Example
//!
//! ```
//! use autosheet_backend_tileset::color::Color;
//! use autosheet_backend_tileset::template::{self, TemplateConfig};
//! use autosheet_spec::template::TileFormat;
//!
//! let config = TemplateConfig {
//!     tile_format: TileFormat::Tile16,
//!     tile_size: 32,
//!     padding: 0,
//!     offset: 0,
//!     fill_color: Color::from_hex("#ff8040").unwrap(),
//!     border_color: Color::from_hex("#40c0ff").unwrap(),
//!     border_width: 4,
//!     detailed_colors: None,
//! };
//!
//! let surface = template::generate(&config);
//! assert_eq!((surface.width(), surface.height()), (128, 128));
//! ```

pub mod adjust;
pub mod color;
pub mod layout;
pub mod png;
pub mod surface;
pub mod template;

// Re-export main types for convenience
pub use adjust::{AdjustmentOutcome, ContentAdjuster};
pub use color::{Color, ColorParseError};
pub use layout::{
    edge_table, PlatformerCell, PlatformerTile, SolidKind, TileEdgeMask, PLATFORMER_LAYOUT,
    TILE_16_EDGES, TILE_47_EDGES,
};
pub use png::{PngConfig, PngError};
pub use surface::{PixelSurface, Rect, SurfaceError, TileBounds, DEFAULT_ALPHA_THRESHOLD};
pub use template::{
    BorderColors, ConfigError, EdgePosition, TemplateConfig, TemplateDimensions,
};
