//! Bootstrap diagnostics output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing to the real stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! Only appboot's own lines go through here. Package manager and
//! application output never does: those streams are inherited directly.
//!
//! # Example
//!
//! ```
//! use appboot::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Using interpreter: /usr/bin/python3");
//! assert_eq!(ui.messages(), ["Using interpreter: /usr/bin/python3"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, AppbootTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a diagnostic line on stdout.
    fn message(&mut self, msg: &str);

    /// Display a secondary line (dry-run plans) on stdout.
    fn hint(&mut self, msg: &str);

    /// Display an error on stderr. Shown in every mode.
    fn error(&mut self, msg: &str);
}
