//! Visual theme and styling.

use console::Style;

/// appboot's visual theme.
#[derive(Debug, Clone)]
pub struct AppbootTheme {
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for secondary text (dim).
    pub dim: Style,
}

impl AppbootTheme {
    /// Create the colored theme.
    pub fn styled() -> Self {
        Self {
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format an error line.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(msg))
    }

    /// Format a secondary line.
    pub fn format_dim(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(msg))
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = AppbootTheme::plain();
        assert_eq!(theme.format_error("boom"), "boom");
        assert_eq!(theme.format_dim("quiet"), "quiet");
    }

    #[test]
    fn styled_theme_keeps_message() {
        let theme = AppbootTheme::styled();
        assert!(theme.format_error("boom").contains("boom"));
    }
}
