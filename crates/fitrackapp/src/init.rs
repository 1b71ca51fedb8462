//! # Data Directory Resolution
//!
//! All collections and the config file live in one data directory,
//! resolved during [`initialize`]:
//!
//! 1. `data_override` (the CLI's `--data` flag) → used as-is.
//! 2. `FITRACK_DATA_DIR` environment variable → used as-is.
//! 3. Otherwise the OS-appropriate data directory (via the `directories` crate).
//!
//! The directory is not created here; the store creates it on first write.

use crate::api::FitrackApi;
use crate::config::{FitrackConfig, APP_NAME, CONFIG_FILE};
use crate::error::{FitrackError, Result};
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchPath};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DATA_DIR_ENV: &str = "FITRACK_DATA_DIR";

pub struct FitrackContext {
    pub api: FitrackApi<FileStore>,
    pub config: FitrackConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "fitrack", "fitrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            FitrackError::Config(format!(
                "Could not determine a data directory; set {} or pass --data",
                DATA_DIR_ENV
            ))
        })
}

/// Initialize the fitrack context: data directory, config and file store.
///
/// An unreadable config file is reported and replaced by defaults.
pub fn initialize(data_override: Option<PathBuf>) -> Result<FitrackContext> {
    let data_dir = resolve_data_dir(data_override)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config: FitrackConfig = Clapfig::builder()
        .app_name(APP_NAME)
        .file_name(CONFIG_FILE)
        .search_paths(vec![SearchPath::Path(data_dir.clone())])
        .load()
        .unwrap_or_else(|e| {
            warn!(error = %e, "ignoring invalid config, using defaults");
            FitrackConfig::default()
        });

    let store = FileStore::new(data_dir.clone()).with_indent(config.json_indent);
    Ok(FitrackContext {
        api: FitrackApi::new(store),
        config,
        data_dir,
    })
}
