//! Shared errors and configuration for Folio.
//!
//! This crate provides the foundational types used by the Folio content
//! crate. It has no internal Folio dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Configuration loading (file, environment, defaults)

pub mod config;
pub mod error;

// Re-export key types at crate root for convenience
pub use config::{FolioConfig, ImageConfig, MarkdownConfig};
pub use error::{Error, Result};
