pub mod types;

use crate::error::{RainbowError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".rainbow.toml";

/// Get the global config file path (~/.rainbow.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (./.rainbow.toml)
pub fn local_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults
///
/// An explicit path must exist. Otherwise the local config is tried first,
/// then the global one. A file that exists but does not parse is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let local = local_config_path();
    if local.exists() {
        return read_config(&local);
    }

    if let Some(global) = global_config_path() {
        if global.exists() {
            return read_config(&global);
        }
    }

    debug!("No configuration file found, using defaults");
    Ok(types::Config::default())
}

fn read_config(path: &Path) -> Result<types::Config> {
    debug!("Loading configuration from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|e| RainbowError::Config(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| RainbowError::Config(format!("{}: {}", path.display(), e)))
}
