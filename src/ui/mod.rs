//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the real terminal
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use projenv::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.value("production");
//! ui.error("nothing found");
//! assert_eq!(ui.values(), &["production".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ProjenvTheme};

/// Trait for user-facing output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print a plain result line on stdout. Always shown, never styled,
    /// so scripts can capture it.
    fn value(&mut self, value: &str);

    /// Print a labelled line, e.g. `root: /srv/app`.
    fn key_value(&mut self, key: &str, value: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
