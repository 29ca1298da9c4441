//! Configuration for the Folio transform.
//!
//! Provides the [`FolioConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit config path argument
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults
//!
//! # Example file
//!
//! ```toml
//! [images]
//! base_url = "https://cdn.example.com/assets/"
//!
//! [markdown]
//! front_matter = true
//! tables = false
//! ```

use crate::{Error, Result};
use confyg::{Confygery, env};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the section transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Image URL handling.
    pub images: ImageConfig,

    /// Markdown parser options.
    pub markdown: MarkdownConfig,
}

/// Image URL configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Base URL that relative image references are resolved against.
    /// When unset, image URLs are passed through unchanged.
    pub base_url: Option<String>,
}

/// Markdown parser configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Recognize a leading `---` YAML block as front-matter.
    pub front_matter: bool,

    /// Enable GFM tables.
    pub tables: bool,

    /// Enable GFM strikethrough.
    pub strikethrough: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            front_matter: true,
            tables: true,
            strikethrough: true,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A config path that does not exist is skipped silently and the
    /// remaining sources apply.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("FOLIO");
        env_opts.add_section("images");
        env_opts.add_section("markdown");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit argument, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// Parse a config from a TOML string, applying defaults for missing keys.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
