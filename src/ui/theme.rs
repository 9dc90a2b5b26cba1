//! Visual theme and styling.

use console::Style;

/// projenv's visual theme.
#[derive(Debug, Clone)]
pub struct ProjenvTheme {
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for ProjenvTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjenvTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            key: Style::new().bold(),
        }
    }

    /// A theme without any styling.
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
            key: Style::new(),
        }
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("warning: {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("error: {}", msg)))
    }

    pub fn format_key_value(&self, key: &str, value: &str) -> String {
        format!("{} {}", self.key.apply_to(format!("{}:", key)), value)
    }
}

/// Whether output should be colored.
///
/// Honors `NO_COLOR` and falls back to console's terminal detection.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::colors_enabled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_has_no_escapes() {
        let theme = ProjenvTheme::plain();
        assert_eq!(theme.format_error("boom"), "error: boom");
        assert_eq!(theme.format_warning("hmm"), "warning: hmm");
        assert_eq!(theme.format_key_value("root", "/srv"), "root: /srv");
    }

    #[test]
    fn styled_theme_keeps_text() {
        let theme = ProjenvTheme::new();
        assert!(theme.format_error("boom").contains("boom"));
    }
}
