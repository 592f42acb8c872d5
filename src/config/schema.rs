//! Configuration schema for `appboot.yml`.
//!
//! Every field has a default, so an absent or empty file bootstraps a
//! Python application: `python3`, `pip install -r requirements.txt`,
//! then `python3 main.py`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder in `install_args` replaced by the manifest path.
pub const MANIFEST_PLACEHOLDER: &str = "{manifest}";

/// Root configuration structure for appboot.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppbootConfig {
    /// Interpreter executable name, looked up on PATH
    pub interpreter: String,

    /// Arguments that make the interpreter print its version
    pub version_args: Vec<String>,

    /// Dependency manifest (relative to project root)
    pub manifest: PathBuf,

    /// Arguments passed to the interpreter to install the manifest
    pub install_args: Vec<String>,

    /// Skip dependency installation
    pub skip_install: bool,

    /// Application entry point (relative to project root)
    pub entry_point: PathBuf,

    /// How control is handed to the application
    pub launch_mode: LaunchMode,
}

impl Default for AppbootConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            version_args: vec!["--version".to_string()],
            manifest: PathBuf::from("requirements.txt"),
            install_args: ["-m", "pip", "install", "-r", MANIFEST_PLACEHOLDER]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skip_install: false,
            entry_point: PathBuf::from("main.py"),
            launch_mode: LaunchMode::default(),
        }
    }
}

/// How the launcher hands control to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchMode {
    /// Spawn the application, wait for it, and exit with its status.
    #[default]
    Wait,
    /// Replace the bootstrap's process image with the application (Unix).
    Exec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bootstrap_python() {
        let config = AppbootConfig::default();
        assert_eq!(config.interpreter, "python3");
        assert_eq!(config.manifest, PathBuf::from("requirements.txt"));
        assert_eq!(config.entry_point, PathBuf::from("main.py"));
        assert_eq!(config.launch_mode, LaunchMode::Wait);
        assert!(config.install_args.contains(&MANIFEST_PLACEHOLDER.to_string()));
    }

    #[test]
    fn empty_yaml_is_all_defaults() {
        let config: AppbootConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppbootConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = r#"
interpreter: node
entry_point: server.js
launch_mode: exec
"#;
        let config: AppbootConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.interpreter, "node");
        assert_eq!(config.entry_point, PathBuf::from("server.js"));
        assert_eq!(config.launch_mode, LaunchMode::Exec);
        assert_eq!(config.manifest, PathBuf::from("requirements.txt"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<AppbootConfig, _> = serde_yaml::from_str("interpretr: python3");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_launch_mode_is_rejected() {
        let result: Result<AppbootConfig, _> = serde_yaml::from_str("launch_mode: fork");
        assert!(result.is_err());
    }
}
