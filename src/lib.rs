//! appboot - Application startup bootstrap.
//!
//! appboot verifies that an interpreter is on the search path, installs the
//! application's declared dependencies with the package manager, and then
//! launches the application, relaying its exit status. Each step is a gate:
//! the first failure ends the run with that step's native exit status.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional `appboot.yml` loading
//! - [`environment`] - Interpreter lookup and version reporting
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Dependency installation
//! - [`runner`] - The verify → install → launch sequence
//! - [`shell`] - Child process execution
//! - [`ui`] - Diagnostic output
//!
//! # Example
//!
//! ```
//! use appboot::config::AppbootConfig;
//! use appboot::environment::SearchPath;
//! use appboot::runner::{Bootstrap, Outcome, Stage};
//! use appboot::ui::MockUI;
//!
//! // An empty search path: the interpreter cannot resolve.
//! let mut run = Bootstrap::new(AppbootConfig::default(), std::env::temp_dir())
//!     .with_search_path(SearchPath::from_entries(Vec::new()));
//! let outcome = run.run(&mut MockUI::new());
//!
//! assert!(matches!(outcome, Outcome::Failed { stage: Stage::Verifying, .. }));
//! assert_eq!(outcome.exit_code(), 127);
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{AppbootError, Result};
