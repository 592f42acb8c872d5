//! Error types for appboot operations.
//!
//! This module defines [`AppbootError`], the error type used by every
//! bootstrap gate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each gate has its own variant so the caller knows which gate failed
//! - Every variant carries the exit status that should be relayed to the
//!   invoking shell, see [`AppbootError::exit_code`]
//! - Nothing is retried; the first error ends the run

use std::path::PathBuf;
use thiserror::Error;

/// Exit status the shell uses when a command cannot be found.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit status the shell uses when a command is found but cannot be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Exit status for bootstrap usage/config errors.
pub const EXIT_USAGE: i32 = 2;

/// Core error type for appboot operations.
#[derive(Debug, Error)]
pub enum AppbootError {
    /// No executable with the interpreter's name on the search path.
    #[error("{name}: command not found")]
    InterpreterNotFound { name: String },

    /// The package manager failed and the manifest is missing or unreadable.
    #[error("Dependency manifest unavailable: {path}")]
    ManifestUnavailable { path: PathBuf, code: i32 },

    /// The package manager failed to spawn or exited with a failure status.
    ///
    /// `spawned` is false when the package manager never ran.
    #[error("Dependency installation failed with exit code {code}")]
    InstallFailed { code: i32, spawned: bool },

    /// The application could not be started.
    ///
    /// `spawned` is false when the interpreter process never ran.
    #[error("Failed to launch {path}: {message}")]
    LaunchFailure {
        path: PathBuf,
        message: String,
        code: i32,
        spawned: bool,
    },

    /// Config file given on the command line does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppbootError {
    /// Exit status to relay to the invoking shell.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InterpreterNotFound { .. } => EXIT_NOT_FOUND,
            Self::ManifestUnavailable { code, .. } => *code,
            Self::InstallFailed { code, .. } => *code,
            Self::LaunchFailure { code, .. } => *code,
            Self::ConfigNotFound { .. } | Self::ConfigParseError { .. } => EXIT_USAGE,
            Self::Io(_) | Self::Other(_) => 1,
        }
    }

    /// Whether the failing tool already printed its own diagnostics.
    ///
    /// For these errors appboot stays silent and only relays the status.
    pub fn reported_by_tool(&self) -> bool {
        match self {
            Self::ManifestUnavailable { .. } => true,
            Self::InstallFailed { spawned, .. } | Self::LaunchFailure { spawned, .. } => *spawned,
            _ => false,
        }
    }
}

/// Result type alias for appboot operations.
pub type Result<T> = std::result::Result<T, AppbootError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpreter_not_found_reads_like_the_shell() {
        let err = AppbootError::InterpreterNotFound {
            name: "python3".into(),
        };
        assert_eq!(err.to_string(), "python3: command not found");
        assert_eq!(err.exit_code(), 127);
        assert!(!err.reported_by_tool());
    }

    #[test]
    fn manifest_unavailable_relays_package_manager_code() {
        let err = AppbootError::ManifestUnavailable {
            path: PathBuf::from("requirements.txt"),
            code: 1,
        };
        assert!(err.to_string().contains("requirements.txt"));
        assert_eq!(err.exit_code(), 1);
        assert!(err.reported_by_tool());
    }

    #[test]
    fn install_failed_relays_code() {
        let err = AppbootError::InstallFailed {
            code: 23,
            spawned: true,
        };
        assert!(err.to_string().contains("23"));
        assert_eq!(err.exit_code(), 23);
        assert!(err.reported_by_tool());
    }

    #[test]
    fn install_spawn_failure_is_reported_locally() {
        let err = AppbootError::InstallFailed {
            code: EXIT_NOT_FOUND,
            spawned: false,
        };
        assert_eq!(err.exit_code(), 127);
        assert!(!err.reported_by_tool());
    }

    #[test]
    fn launch_failure_on_spawn_is_reported_locally() {
        let err = AppbootError::LaunchFailure {
            path: PathBuf::from("/usr/bin/python3"),
            message: "No such file or directory".into(),
            code: EXIT_NOT_FOUND,
            spawned: false,
        };
        let msg = err.to_string();
        assert!(msg.contains("/usr/bin/python3"));
        assert!(msg.contains("No such file or directory"));
        assert!(!err.reported_by_tool());
    }

    #[test]
    fn launch_failure_from_interpreter_is_relayed_silently() {
        let err = AppbootError::LaunchFailure {
            path: PathBuf::from("main.py"),
            message: "entry point not found".into(),
            code: 2,
            spawned: true,
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.reported_by_tool());
    }

    #[test]
    fn interpreter_exiting_127_is_still_relayed_silently() {
        // bash reports a missing script with 127 after printing its own message.
        let err = AppbootError::LaunchFailure {
            path: PathBuf::from("main.sh"),
            message: "entry point not found".into(),
            code: EXIT_NOT_FOUND,
            spawned: true,
        };
        assert!(err.reported_by_tool());
    }

    #[test]
    fn config_errors_use_usage_code() {
        let err = AppbootError::ConfigParseError {
            path: PathBuf::from("/appboot.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/appboot.yml"));
        assert!(msg.contains("invalid syntax"));
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AppbootError = io_err.into();
        assert!(matches!(err, AppbootError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
