//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    hints: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.messages.push(msg.to_string());
        }
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.hints.push(msg.to_string());
        }
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
