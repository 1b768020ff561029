//! Error types for template spec validation.

use thiserror::Error;

/// Stable machine-readable codes for validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// T001: tile_size is zero
    ZeroTileSize,
    /// T002: a color field is not a valid hex color
    InvalidColor,
    /// T003: border_width exceeds half the tile size
    BorderTooWide,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "T001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::ZeroTileSize => "T001",
            ErrorCode::InvalidColor => "T002",
            ErrorCode::BorderTooWide => "T003",
        }
    }
}

/// A single validation failure with its code and human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .code.code(), .message)]
pub struct ValidationError {
    /// Machine-readable error code.
    pub code: ErrorCode,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
