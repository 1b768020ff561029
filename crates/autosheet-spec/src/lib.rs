//! Autosheet Canonical Spec Library
//!
//! This crate provides the document types shared by the autosheet backend and
//! CLI. A template spec is a JSON document describing an autotile sheet
//! layout: tile format, geometry, and colors. The crate also carries the
//! validation that runs at the interface layer (the rendering backend trusts
//! a resolved config and performs no validation of its own) and the
//! adjustment-report types the backend emits when reconciling an external
//! sprite sheet against the template grid.
//!
//! # Example
//!
//! ```
//! use autosheet_spec::template::{TemplateSpec, TileFormat};
//! use autosheet_spec::validation::validate_template_spec;
//!
//! let spec: TemplateSpec =
//!     serde_json::from_str(r#"{ "tile_format": "47", "tile_size": 32 }"#).unwrap();
//!
//! assert_eq!(spec.tile_format, TileFormat::Tile47);
//! assert_eq!(spec.tile_format.grid_size(), (8, 6));
//! assert!(validate_template_spec(&spec).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes and types for validation
//! - [`report`]: Adjustment report types emitted by the backend
//! - [`template`]: Template spec document types
//! - [`validation`]: Spec validation functions

pub mod error;
pub mod report;
pub mod template;
pub mod validation;

// Re-export main types at crate root
pub use error::{ErrorCode, ValidationError};
pub use report::{AdjustMode, AdjustmentReport, PlacedRect, SourceRect, TileAdjustment};
pub use template::{DetailedColorsSpec, TemplateSpec, TileFormat};
pub use validation::validate_template_spec;
