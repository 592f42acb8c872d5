//! Configuration file discovery and loading.

use crate::config::schema::AppbootConfig;
use crate::error::{AppbootError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the project root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "appboot.yml";

/// Find the config file to load, if any.
///
/// An explicit path must exist. Without one, `appboot.yml` in the project
/// root is used when present.
pub fn discover_config(project_root: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        };
        if !path.is_file() {
            return Err(AppbootError::ConfigNotFound { path });
        }
        return Ok(Some(path));
    }

    let default = project_root.join(CONFIG_FILE_NAME);
    Ok(default.is_file().then_some(default))
}

/// Parse a single config file.
pub fn load_config_file(path: &Path) -> Result<AppbootConfig> {
    let content = fs::read_to_string(path)?;

    // An empty file is an empty mapping, not a parse error.
    if content.trim().is_empty() {
        return Ok(AppbootConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|e| AppbootError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the configuration for a project.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<AppbootConfig> {
    match discover_config(project_root, explicit)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_config_file(&path)
        }
        None => Ok(AppbootConfig::default()),
    }
}
