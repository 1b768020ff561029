//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same surface always encodes to
//! byte-identical output, which lets adjustment runs be compared by hash.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::surface::PixelSurface;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. `NoFilter` keeps output maximally stable.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Config optimized for file size (slower, still deterministic).
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Config optimized for speed (faster, larger files).
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write a surface to a PNG file.
pub fn write_rgba(surface: &PixelSurface, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgba_to_writer(surface, writer, config)
}

/// Write a surface to any writer.
pub fn write_rgba_to_writer<W: Write>(
    surface: &PixelSurface,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, surface.width(), surface.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(surface.as_rgba8())?;
    Ok(())
}

/// Compute the BLAKE3 hash of encoded PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a byte vector and return it with its hash.
pub fn write_rgba_to_vec_with_hash(
    surface: &PixelSurface,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgba_to_writer(surface, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::surface::Rect;

    fn gradient_surface() -> PixelSurface {
        let mut surface = PixelSurface::new(32, 32);
        for y in 0..32 {
            for x in 0..32 {
                surface.set(x, y, Color::rgba((x * 8) as u8, (y * 8) as u8, 128, 255));
            }
        }
        surface
    }

    #[test]
    fn encoding_is_deterministic() {
        let surface = gradient_surface();
        let config = PngConfig::default();

        let (data1, hash1) = write_rgba_to_vec_with_hash(&surface, &config).unwrap();
        let (data2, hash2) = write_rgba_to_vec_with_hash(&surface, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn different_surfaces_hash_differently() {
        let config = PngConfig::default();
        let a = gradient_surface();
        let mut b = gradient_surface();
        b.fill_rect(Rect::new(0, 0, 1, 1), Color::TRANSPARENT);

        let (_, hash_a) = write_rgba_to_vec_with_hash(&a, &config).unwrap();
        let (_, hash_b) = write_rgba_to_vec_with_hash(&b, &config).unwrap();
        assert_ne!(hash_a, hash_b);
    }

    #[test]
    fn file_output_matches_vec_output() {
        let surface = gradient_surface();
        let config = PngConfig::default();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        write_rgba(&surface, &path, &config).unwrap();

        let (data, _) = write_rgba_to_vec_with_hash(&surface, &config).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), data);
    }
}
