//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{AppbootTheme, OutputMode, UserInterface};

/// Terminal UI: diagnostics on stdout, errors on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: AppbootTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            AppbootTheme::styled()
        } else {
            AppbootTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_dim(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}
