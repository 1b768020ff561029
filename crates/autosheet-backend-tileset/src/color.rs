//! Color utilities for template rendering.

use thiserror::Error;

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Errors from parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected '#rrggbb' or '#rrggbbaa', got '{0}'")]
    InvalidLength(String),

    #[error("'{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) {
            return Err(ColorParseError::InvalidLength(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if digits.len() == 8 { channel(6..8)? } else { 255 };
        Ok(Self { r, g, b, a })
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Convert to an RGBA byte quad.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from an RGBA byte quad.
    pub const fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        }
    }

    /// Source-over composite of `self` over `dst`, non-premultiplied.
    pub fn over(self, dst: Color) -> Color {
        let sa = self.a as u32;
        let da = dst.a as u32;
        let out_a = sa + da * (255 - sa) / 255;
        if out_a == 0 {
            return Color::TRANSPARENT;
        }

        let blend = |s: u8, d: u8| -> u8 {
            let s = s as u32;
            let d = d as u32;
            ((s * sa + d * da * (255 - sa) / 255) / out_a) as u8
        };

        Color {
            r: blend(self.r, dst.r),
            g: blend(self.g, dst.g),
            b: blend(self.b, dst.b),
            a: out_a as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color::from_hex("#ff8040"), Ok(Color::rgb(255, 128, 64)));
        assert_eq!(Color::from_hex("ff8040"), Ok(Color::rgb(255, 128, 64)));
    }

    #[test]
    fn parses_eight_digit_hex() {
        assert_eq!(
            Color::from_hex("#11223344"),
            Ok(Color::rgba(0x11, 0x22, 0x33, 0x44))
        );
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(matches!(
            Color::from_hex("#fff"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::from_hex("#zzzzzz"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn hex_round_trips() {
        for hex in ["#ff8040", "#000000", "#12345678"] {
            let color = Color::from_hex(hex).unwrap();
            assert_eq!(color.to_hex(), hex);
        }
    }

    #[test]
    fn opaque_source_replaces_destination() {
        let src = Color::rgb(10, 20, 30);
        let dst = Color::rgb(200, 210, 220);
        assert_eq!(src.over(dst), src);
    }

    #[test]
    fn source_over_transparent_keeps_source() {
        let src = Color::rgba(10, 20, 30, 128);
        assert_eq!(src.over(Color::TRANSPARENT), src);
    }

    #[test]
    fn half_alpha_over_opaque_blends() {
        let src = Color::rgba(255, 0, 0, 128);
        let dst = Color::rgb(0, 0, 255);
        let out = src.over(dst);
        assert_eq!(out.a, 255);
        assert!(out.r > 100 && out.r < 160, "r was {}", out.r);
        assert!(out.b > 100 && out.b < 160, "b was {}", out.b);
    }
}
