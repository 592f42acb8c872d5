//! Command-line interface for appboot.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Config loading and the bootstrap run

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::run;
