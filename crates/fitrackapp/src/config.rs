//! # Configuration
//!
//! Fitrack configuration is managed by [`clapfig`], which handles layered loading
//! from a TOML file and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `FITRACK__JSON_INDENT`, `FITRACK__REPORT_PRECISION`.
//! 2. **Config file**: `fitrack.toml` in the data directory.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `json_indent` | `4` | Indent width of stored collections (`0` = compact) |
//! | `report_precision` | `2` | Decimals shown for averages |
//!
//! ## CLI Usage
//!
//! - `fitrack config`: Show all configuration values.
//! - `fitrack config <key>`: Get a specific value.
//! - `fitrack config <key> <value>`: Set a value in `fitrack.toml`.

use confique::Config;
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "fitrack";
pub const CONFIG_FILE: &str = "fitrack.toml";

/// Configuration for fitrack, stored in `fitrack.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FitrackConfig {
    /// Indent width of the stored JSON collections; 0 writes compact JSON
    #[config(default = 4)]
    pub json_indent: usize,

    /// Decimals shown for averages in progress and health reports
    #[config(default = 2)]
    pub report_precision: usize,
}

impl Default for FitrackConfig {
    fn default() -> Self {
        Self {
            json_indent: 4,
            report_precision: 2,
        }
    }
}
