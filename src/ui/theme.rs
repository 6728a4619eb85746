//! Visual theme and styling.

use console::Style;

/// Styles for the diagnostic output.
#[derive(Debug, Clone)]
pub struct StaleguardTheme {
    /// Style for active packages (green).
    pub success: Style,
    /// Style for stale packages (orange).
    pub warning: Style,
    /// Style for abandoned or deprecated packages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for package names (bold).
    pub highlight: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for StaleguardTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl StaleguardTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            key: Style::new(),
        }
    }

    /// Pick colored or plain based on the environment.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a `Key: value` line with the key padded to `width`.
    pub fn format_field(&self, key: &str, value: &str, width: usize) -> String {
        let label = format!("{}:", key);
        format!("  {} {}", self.key.apply_to(format!("{:<width$}", label)), value)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
