//! RGBA raster surface shared by the template generator and the adjuster.
//!
//! `PixelSurface` is plain data: a width, a height, and a row-major RGBA8
//! byte buffer. All drawing clips to the surface bounds so degenerate
//! geometry degrades visually instead of panicking. No concurrent access is
//! supported; callers must not mutate a surface while another operation
//! reads it.

use thiserror::Error;

use crate::color::Color;

/// Default alpha threshold for content detection: a pixel counts as content
/// when its alpha strictly exceeds this value.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 10;

/// Integer rectangle in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Inclusive bounds of detected content, local to the scanned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl TileBounds {
    /// Width of the bounded region (inclusive bounds).
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height of the bounded region (inclusive bounds).
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Errors from constructing a surface over an existing buffer.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("buffer of {actual} bytes does not match {width}x{height} RGBA ({expected} bytes)")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// A 2D RGBA raster.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize) * 4;
        Self {
            width,
            height,
            data: vec![0; size],
        }
    }

    /// Wrap an existing row-major RGBA8 buffer.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SurfaceError> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(SurfaceError::BufferSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 buffer.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.data
    }

    /// Consume the surface, returning its RGBA8 buffer.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Read the pixel at the given in-bounds coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let i = self.index(x, y);
        Color::from_rgba8([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Overwrite the pixel at the given in-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&color.to_rgba8());
    }

    /// Source-over composite a pixel; out-of-bounds coordinates are ignored.
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let dst = self.get(x, y);
        self.set(x, y, color.over(dst));
    }

    /// Overwrite every pixel with a color.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Overwrite a rectangle, clipped to the surface bounds.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x0 = rect.x.min(self.width);
        let y0 = rect.y.min(self.height);
        let x1 = rect.x.saturating_add(rect.width).min(self.width);
        let y1 = rect.y.saturating_add(rect.height).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, color);
            }
        }
    }

    /// Draw a 1px line between two points, source-over composited.
    /// Points outside the surface are skipped.
    pub fn draw_line(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Color) {
        let (mut x, mut y) = (x0 as i64, y0 as i64);
        let (x1, y1) = (x1 as i64, y1 as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if x >= 0 && y >= 0 {
                self.blend_pixel(x as u32, y as u32, color);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Copy `src_rect` from another surface into `dst_rect` here, scaling
    /// each axis independently with nearest-neighbor sampling and
    /// source-over compositing. Both rects are clipped to their surfaces.
    pub fn blit(&mut self, src: &PixelSurface, src_rect: Rect, dst_rect: Rect) {
        if src_rect.width == 0
            || src_rect.height == 0
            || dst_rect.width == 0
            || dst_rect.height == 0
        {
            return;
        }

        let sx_step = src_rect.width as f64 / dst_rect.width as f64;
        let sy_step = src_rect.height as f64 / dst_rect.height as f64;

        for dy in 0..dst_rect.height {
            let oy = dst_rect.y.saturating_add(dy);
            if oy >= self.height {
                break;
            }
            let sy = src_rect.y + (((dy as f64 + 0.5) * sy_step) as u32).min(src_rect.height - 1);
            if sy >= src.height {
                continue;
            }
            for dx in 0..dst_rect.width {
                let ox = dst_rect.x.saturating_add(dx);
                if ox >= self.width {
                    break;
                }
                let sx =
                    src_rect.x + (((dx as f64 + 0.5) * sx_step) as u32).min(src_rect.width - 1);
                if sx >= src.width {
                    continue;
                }
                let pixel = src.get(sx, sy);
                if pixel.a > 0 {
                    self.blend_pixel(ox, oy, pixel);
                }
            }
        }
    }

    /// Scan every pixel of `rect` (clipped to the surface) and return the
    /// tight inclusive bounds of all pixels whose alpha exceeds
    /// `alpha_threshold`, in the rect's local coordinate space. Returns
    /// `None` when nothing exceeds the threshold.
    ///
    /// The scan is exhaustive: a single stray opaque pixel must be caught,
    /// and tiles are small enough that a full pass is cheap.
    pub fn detect_content_bounds(
        &self,
        rect: Rect,
        alpha_threshold: u8,
    ) -> Option<TileBounds> {
        let x0 = rect.x.min(self.width);
        let y0 = rect.y.min(self.height);
        let x1 = rect.x.saturating_add(rect.width).min(self.width);
        let y1 = rect.y.saturating_add(rect.height).min(self.height);

        let mut bounds: Option<TileBounds> = None;
        for y in y0..y1 {
            for x in x0..x1 {
                let alpha = self.data[self.index(x, y) + 3];
                if alpha <= alpha_threshold {
                    continue;
                }
                let (lx, ly) = (x - rect.x, y - rect.y);
                bounds = Some(match bounds {
                    None => TileBounds {
                        min_x: lx,
                        min_y: ly,
                        max_x: lx,
                        max_y: ly,
                    },
                    Some(b) => TileBounds {
                        min_x: b.min_x.min(lx),
                        min_y: b.min_y.min(ly),
                        max_x: b.max_x.max(lx),
                        max_y: b.max_y.max(ly),
                    },
                });
            }
        }
        bounds
    }
}
