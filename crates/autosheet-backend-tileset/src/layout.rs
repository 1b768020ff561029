//! Autotile layout tables and platformer slope geometry.
//!
//! Pure data: the 16- and 47-tile connectivity tables map a linear sheet
//! index to an edge mask, and the platformer table maps grid cells to slope
//! descriptors. Nothing here touches pixels; rendering lives in
//! [`crate::template`].

use autosheet_spec::template::TileFormat;

/// Connectivity bitmask for one autotile cell.
///
/// A set cardinal bit means the cell connects to a same-type neighbor in
/// that direction, so the corresponding border is not drawn. A set diagonal
/// bit means the inner corner is not drawn. Diagonal bits are only ever set
/// when both adjacent cardinal bits are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileEdgeMask(u8);

// Shorthand used to keep the tables readable.
const T: u8 = 1;
const R: u8 = 2;
const B: u8 = 4;
const L: u8 = 8;
const TL: u8 = 16;
const TR: u8 = 32;
const BR: u8 = 64;
const BL: u8 = 128;

const fn m(bits: u8) -> TileEdgeMask {
    TileEdgeMask(bits)
}

impl TileEdgeMask {
    pub const NONE: TileEdgeMask = m(0);
    pub const TOP: TileEdgeMask = m(T);
    pub const RIGHT: TileEdgeMask = m(R);
    pub const BOTTOM: TileEdgeMask = m(B);
    pub const LEFT: TileEdgeMask = m(L);
    pub const TOP_LEFT: TileEdgeMask = m(TL);
    pub const TOP_RIGHT: TileEdgeMask = m(TR);
    pub const BOTTOM_RIGHT: TileEdgeMask = m(BR);
    pub const BOTTOM_LEFT: TileEdgeMask = m(BL);

    /// Raw bit value.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: TileEdgeMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when every set diagonal bit has both adjacent cardinal bits set.
    pub fn diagonals_anchored(self) -> bool {
        const PAIRS: [(u8, u8); 4] = [(TL, T | L), (TR, T | R), (BR, B | R), (BL, B | L)];
        PAIRS
            .iter()
            .all(|&(diag, cards)| self.0 & diag == 0 || self.0 & cards == cards)
    }
}

impl std::ops::BitOr for TileEdgeMask {
    type Output = TileEdgeMask;

    fn bitor(self, rhs: TileEdgeMask) -> TileEdgeMask {
        TileEdgeMask(self.0 | rhs.0)
    }
}

/// The canonical 4x4 sheet ordering of the 16 cardinal-adjacency patterns.
///
/// Row 0 has no vertical connections (isolated, end caps, horizontal bar);
/// row 1 adds a bottom connection; row 2 holds the full-vertical variants;
/// row 3 mirrors row 1 with a top connection. Downstream tooling relies on
/// this exact cell order.
pub static TILE_16_EDGES: [TileEdgeMask; 16] = [
    // Row 0
    m(0),
    m(R),
    m(L | R),
    m(L),
    // Row 1
    m(B),
    m(B | R),
    m(B | L | R),
    m(B | L),
    // Row 2
    m(T | B),
    m(T | B | R),
    m(T | B | L | R),
    m(T | B | L),
    // Row 3
    m(T),
    m(T | R),
    m(T | L | R),
    m(T | L),
];

/// The 47-entry sheet covering diagonal inner-corner patterns, laid out on
/// an 8x6 grid (the 48th cell stays empty).
///
/// Indices 0-15 reuse [`TILE_16_EDGES`]. 16-30 are the fully connected mask
/// combined with every non-trivial subset of the four diagonals. 31-46 are
/// the single-open-edge variants with their compatible diagonals, in the
/// order external autotile tooling expects; the sequence is a compatibility
/// contract and is pinned by tests.
pub static TILE_47_EDGES: [TileEdgeMask; 47] = [
    // 0-15: the 16-tile table
    m(0),
    m(R),
    m(L | R),
    m(L),
    m(B),
    m(B | R),
    m(B | L | R),
    m(B | L),
    m(T | B),
    m(T | B | R),
    m(T | B | L | R),
    m(T | B | L),
    m(T),
    m(T | R),
    m(T | L | R),
    m(T | L),
    // 16-19: one inner corner
    m(T | B | L | R | BR),
    m(T | B | L | R | BL),
    m(T | B | L | R | TR),
    m(T | B | L | R | TL),
    // 20-23: two adjacent inner corners
    m(T | B | L | R | TL | TR),
    m(T | B | L | R | BL | BR),
    m(T | B | L | R | TL | BL),
    m(T | B | L | R | TR | BR),
    // 24-25: two diagonal inner corners
    m(T | B | L | R | TL | BR),
    m(T | B | L | R | TR | BL),
    // 26-29: three inner corners
    m(T | B | L | R | TL | TR | BL),
    m(T | B | L | R | TL | TR | BR),
    m(T | B | L | R | TL | BL | BR),
    m(T | B | L | R | TR | BL | BR),
    // 30: all four inner corners
    m(T | B | L | R | TL | TR | BL | BR),
    // 31-35: right-edge connections with corners
    m(B | R | BR),
    m(T | R | TR),
    m(T | B | R | TR),
    m(T | B | R | BR),
    m(T | B | R | TR | BR),
    // 36-40: left-edge connections with corners
    m(B | L | BL),
    m(T | L | TL),
    m(T | B | L | TL),
    m(T | B | L | BL),
    m(T | B | L | TL | BL),
    // 41-43: bottom-edge connections with corners
    m(L | R | B | BL),
    m(L | R | B | BR),
    m(L | R | B | BL | BR),
    // 44-46: top-edge connections with corners
    m(L | R | T | TL),
    m(L | R | T | TR),
    m(L | R | T | TL | TR),
];

/// Edge table for an autotile format. The platformer format has no edge
/// masks; its cells are slope descriptors.
pub fn edge_table(format: TileFormat) -> Option<&'static [TileEdgeMask]> {
    match format {
        TileFormat::Tile16 => Some(&TILE_16_EDGES),
        TileFormat::Tile47 => Some(&TILE_47_EDGES),
        TileFormat::Platformer => None,
    }
}

/// Which half of the tile a solid platformer cell fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidKind {
    Floor,
    Ceiling,
    WallLeft,
    WallRight,
}

/// Geometry descriptor for one platformer cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformerTile {
    /// Half-filled solid tile.
    Solid(SolidKind),
    /// Triangle ramp rising to `size * tan(angle)`, clamped to the tile.
    Ramp {
        angle_deg: f64,
        flip_h: bool,
        flip_v: bool,
    },
    /// Flat fill at the height a ramp of this angle reaches.
    Level { angle_deg: f64, ceiling: bool },
    /// Flat fill at a fraction of the tile height.
    LevelFraction { fraction: f64, ceiling: bool },
    /// One segment of a multi-tile slope: the quadrilateral between the
    /// solid edge and a line rising from `step/divisions` to
    /// `(step+1)/divisions` of the tile height, mirrored when `flip_h`,
    /// attached to the ceiling when `flip_v`.
    Slope {
        divisions: u32,
        step: u32,
        flip_h: bool,
        flip_v: bool,
    },
}

/// A populated cell of the platformer sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformerCell {
    pub col: u32,
    pub row: u32,
    pub tile: PlatformerTile,
}

const fn cell(col: u32, row: u32, tile: PlatformerTile) -> PlatformerCell {
    PlatformerCell { col, row, tile }
}

const fn slope(col: u32, row: u32, divisions: u32, step: u32, flip_h: bool, flip_v: bool) -> PlatformerCell {
    cell(
        col,
        row,
        PlatformerTile::Slope {
            divisions,
            step,
            flip_h,
            flip_v,
        },
    )
}

/// The populated subset of the 7x7 platformer sheet.
///
/// Row 0: axis-aligned solids. Rows 1-2: 45-degree ramp triples for floor
/// and ceiling. Rows 3-4: five-cell half-slope groups (one tile of rise
/// over two tiles). Rows 5-6: seven-cell third-slope groups (one tile of
/// rise over three tiles).
pub static PLATFORMER_LAYOUT: [PlatformerCell; 34] = [
    // Row 0: solids
    cell(0, 0, PlatformerTile::Solid(SolidKind::Floor)),
    cell(1, 0, PlatformerTile::Solid(SolidKind::Ceiling)),
    cell(2, 0, PlatformerTile::Solid(SolidKind::WallLeft)),
    cell(3, 0, PlatformerTile::Solid(SolidKind::WallRight)),
    // Row 1: 45-degree floor ramps
    cell(0, 1, PlatformerTile::Ramp { angle_deg: 45.0, flip_h: false, flip_v: false }),
    cell(1, 1, PlatformerTile::Level { angle_deg: 45.0, ceiling: false }),
    cell(2, 1, PlatformerTile::Ramp { angle_deg: 45.0, flip_h: true, flip_v: false }),
    // Row 2: 45-degree ceiling ramps
    cell(0, 2, PlatformerTile::Ramp { angle_deg: 45.0, flip_h: false, flip_v: true }),
    cell(1, 2, PlatformerTile::Level { angle_deg: 45.0, ceiling: true }),
    cell(2, 2, PlatformerTile::Ramp { angle_deg: 45.0, flip_h: true, flip_v: true }),
    // Row 3: half-slope floor group
    slope(0, 3, 2, 0, false, false),
    slope(1, 3, 2, 1, false, false),
    cell(2, 3, PlatformerTile::LevelFraction { fraction: 1.0, ceiling: false }),
    slope(3, 3, 2, 1, true, false),
    slope(4, 3, 2, 0, true, false),
    // Row 4: half-slope ceiling group
    slope(0, 4, 2, 0, false, true),
    slope(1, 4, 2, 1, false, true),
    cell(2, 4, PlatformerTile::LevelFraction { fraction: 1.0, ceiling: true }),
    slope(3, 4, 2, 1, true, true),
    slope(4, 4, 2, 0, true, true),
    // Row 5: third-slope floor group
    slope(0, 5, 3, 0, false, false),
    slope(1, 5, 3, 1, false, false),
    slope(2, 5, 3, 2, false, false),
    cell(3, 5, PlatformerTile::LevelFraction { fraction: 1.0, ceiling: false }),
    slope(4, 5, 3, 2, true, false),
    slope(5, 5, 3, 1, true, false),
    slope(6, 5, 3, 0, true, false),
    // Row 6: third-slope ceiling group
    slope(0, 6, 3, 0, false, true),
    slope(1, 6, 3, 1, false, true),
    slope(2, 6, 3, 2, false, true),
    cell(3, 6, PlatformerTile::LevelFraction { fraction: 1.0, ceiling: true }),
    slope(4, 6, 3, 2, true, true),
    slope(5, 6, 3, 1, true, true),
    slope(6, 6, 3, 0, true, true),
];

/// Height a ramp of `angle_deg` reaches across a tile of `size` pixels,
/// clamped to the tile.
pub fn ramp_rise(angle_deg: f64, size: u32) -> f64 {
    (size as f64 * angle_deg.to_radians().tan()).min(size as f64)
}

/// Start and end heights (in pixels) of one multi-tile slope segment.
pub fn slope_span(divisions: u32, step: u32, size: u32) -> (f64, f64) {
    let d = divisions.max(1) as f64;
    let size = size as f64;
    (size * step as f64 / d, size * (step + 1) as f64 / d)
}

/// Rasterize a linear profile from height `h0` at the left edge to `h1` at
/// the right edge into per-column fill heights, sampling at column centers.
/// `flip_h` mirrors the profile.
pub fn column_heights(size: u32, h0: f64, h1: f64, flip_h: bool) -> Vec<u32> {
    (0..size)
        .map(|x| {
            let mut t = (x as f64 + 0.5) / size as f64;
            if flip_h {
                t = 1.0 - t;
            }
            let h = h0 + (h1 - h0) * t;
            (h.round().max(0.0) as u32).min(size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tile_16_table_matches_reference_order() {
        let expected: [u8; 16] = [
            0,
            R,
            L | R,
            L,
            B,
            B | R,
            B | L | R,
            B | L,
            T | B,
            T | B | R,
            T | B | L | R,
            T | B | L,
            T,
            T | R,
            T | L | R,
            T | L,
        ];
        let actual: Vec<u8> = TILE_16_EDGES.iter().map(|e| e.bits()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn tile_16_has_no_diagonals() {
        let diagonals = TL | TR | BR | BL;
        for mask in TILE_16_EDGES {
            assert_eq!(mask.bits() & diagonals, 0, "mask {:#010b}", mask.bits());
        }
    }

    #[test]
    fn tile_47_prefix_is_the_16_table() {
        assert_eq!(&TILE_47_EDGES[..16], &TILE_16_EDGES[..]);
    }

    #[test]
    fn tile_47_masks_are_distinct() {
        let unique: HashSet<u8> = TILE_47_EDGES.iter().map(|e| e.bits()).collect();
        assert_eq!(unique.len(), 47);
    }

    #[test]
    fn tile_47_diagonals_are_anchored() {
        for mask in TILE_47_EDGES {
            assert!(mask.diagonals_anchored(), "mask {:#010b}", mask.bits());
        }
    }

    #[test]
    fn tile_47_corner_tail_order_is_pinned() {
        assert_eq!(TILE_47_EDGES[16].bits(), T | B | L | R | BR);
        assert_eq!(TILE_47_EDGES[30].bits(), T | B | L | R | TL | TR | BR | BL);
        assert_eq!(TILE_47_EDGES[31].bits(), B | R | BR);
        assert_eq!(TILE_47_EDGES[46].bits(), L | R | T | TL | TR);
    }

    #[test]
    fn edge_table_maps_formats() {
        assert_eq!(edge_table(TileFormat::Tile16).unwrap().len(), 16);
        assert_eq!(edge_table(TileFormat::Tile47).unwrap().len(), 47);
        assert!(edge_table(TileFormat::Platformer).is_none());
    }

    #[test]
    fn contains_checks_all_bits() {
        let mask = TileEdgeMask::TOP | TileEdgeMask::RIGHT;
        assert!(mask.contains(TileEdgeMask::TOP));
        assert!(mask.contains(TileEdgeMask::TOP | TileEdgeMask::RIGHT));
        assert!(!mask.contains(TileEdgeMask::BOTTOM));
    }

    #[test]
    fn dangling_diagonal_is_not_anchored() {
        assert!(!m(TL).diagonals_anchored());
        assert!(!m(T | TL).diagonals_anchored());
        assert!(m(T | L | TL).diagonals_anchored());
    }

    #[test]
    fn platformer_layout_row_populations() {
        assert_eq!(PLATFORMER_LAYOUT.len(), 34);
        let mut per_row = [0u32; 7];
        for cell in PLATFORMER_LAYOUT {
            assert!(cell.col < 7 && cell.row < 7);
            per_row[cell.row as usize] += 1;
        }
        assert_eq!(per_row, [4, 3, 3, 5, 5, 7, 7]);
    }

    #[test]
    fn platformer_cells_are_unique() {
        let unique: HashSet<(u32, u32)> =
            PLATFORMER_LAYOUT.iter().map(|c| (c.col, c.row)).collect();
        assert_eq!(unique.len(), PLATFORMER_LAYOUT.len());
    }

    #[test]
    fn ramp_rise_matches_angles() {
        assert!((ramp_rise(45.0, 32) - 32.0).abs() < 1e-6);
        assert!((ramp_rise(30.0, 32) - 32.0 * (30.0f64.to_radians().tan())).abs() < 1e-9);
        assert!((ramp_rise(15.0, 100) - 100.0 * (15.0f64.to_radians().tan())).abs() < 1e-9);
        // Steep angles clamp to the tile.
        assert_eq!(ramp_rise(80.0, 32), 32.0);
    }

    #[test]
    fn slope_span_fractions() {
        assert_eq!(slope_span(2, 0, 32), (0.0, 16.0));
        assert_eq!(slope_span(2, 1, 32), (16.0, 32.0));
        let (h0, h1) = slope_span(3, 2, 30);
        assert!((h0 - 20.0).abs() < 1e-9);
        assert!((h1 - 30.0).abs() < 1e-9);
    }

    #[test]
    fn column_heights_taper_linearly() {
        let heights = column_heights(32, 0.0, 16.0, false);
        assert_eq!(heights.len(), 32);
        assert_eq!(heights[0], 0);
        assert_eq!(heights[31], 16);
        assert!(heights.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn column_heights_mirror_when_flipped() {
        let forward = column_heights(16, 4.0, 12.0, false);
        let mirrored = column_heights(16, 4.0, 12.0, true);
        let reversed: Vec<u32> = forward.iter().rev().copied().collect();
        assert_eq!(mirrored, reversed);
    }
}
