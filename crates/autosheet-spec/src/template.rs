//! Template spec document types.

use serde::{Deserialize, Serialize};

/// Autotile sheet layout cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileFormat {
    /// 4x4 sheet covering the 16 cardinal-adjacency patterns.
    #[serde(rename = "16")]
    Tile16,
    /// 8x6 sheet adding the diagonal inner-corner patterns.
    #[serde(rename = "47")]
    Tile47,
    /// 7x7 sheet of platformer slope and solid tiles.
    #[serde(rename = "platformer")]
    Platformer,
}

impl TileFormat {
    /// Grid shape (columns, rows) of this format's sheet.
    pub fn grid_size(self) -> (u32, u32) {
        match self {
            TileFormat::Tile16 => (4, 4),
            TileFormat::Tile47 => (8, 6),
            TileFormat::Platformer => (7, 7),
        }
    }

    /// Short name used in file names and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            TileFormat::Tile16 => "16",
            TileFormat::Tile47 => "47",
            TileFormat::Platformer => "platformer",
        }
    }
}

/// A template generation request, as written in a JSON spec file.
///
/// Colors are hex strings (`#rrggbb` or `#rrggbbaa`, leading `#` optional);
/// they are resolved into channel values by the backend when the spec is
/// turned into a renderer config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSpec {
    /// Which tile layout to produce.
    pub tile_format: TileFormat,
    /// Edge length of one tile in pixels.
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    /// Blank pixels between adjacent tiles.
    #[serde(default)]
    pub padding: u32,
    /// Blank pixels before the first tile on each axis.
    #[serde(default)]
    pub offset: u32,
    /// Tile interior color.
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
    /// Border stripe color, used when `detailed_colors` is absent.
    #[serde(default = "default_border_color")]
    pub border_color: String,
    /// Border stripe thickness in pixels. Must not exceed half the tile size.
    #[serde(default = "default_border_width")]
    pub border_width: u32,
    /// Per-edge border colors. Presence switches the detailed color mode on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_colors: Option<DetailedColorsSpec>,
}

fn default_tile_size() -> u32 {
    64
}

fn default_border_width() -> u32 {
    10
}

fn default_fill_color() -> String {
    "#ff8040".to_string()
}

fn default_border_color() -> String {
    "#40c0ff".to_string()
}

/// Per-edge border colors (hex strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedColorsSpec {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub corner: String,
}
