//! Autosheet CLI library.
//!
//! Command implementations live here so they can be exercised as a library;
//! `main.rs` only parses arguments and dispatches.

pub mod commands;
