//! CLI argument definitions.
//!
//! appboot takes no required arguments. Everything after its own flags
//! (or after `--`) is handed to the application untouched.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{AppbootConfig, LaunchMode};
use crate::ui::OutputMode;

/// appboot - verify the interpreter, install dependencies, launch the app.
#[derive(Debug, Parser)]
#[command(name = "appboot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default appboot.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Suppress appboot's own diagnostic lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip dependency installation
    #[arg(long)]
    pub skip_install: bool,

    /// Verify the interpreter and print the install and launch commands
    #[arg(long)]
    pub dry_run: bool,

    /// Replace this process with the application instead of waiting on it
    #[arg(long)]
    pub exec: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Arguments forwarded to the application
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "APP_ARGS")]
    pub app_args: Vec<OsString>,
}

impl Cli {
    /// Output mode selected by the flags.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }

    /// Apply flag overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut AppbootConfig) {
        if self.skip_install {
            config.skip_install = true;
        }
        if self.exec {
            config.launch_mode = LaunchMode::Exec;
        }
    }
}
