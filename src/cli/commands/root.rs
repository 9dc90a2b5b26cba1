//! Root command implementation.
//!
//! `projenv root` prints the project root.

use crate::environment::Descriptor;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{report_resolution_error, Command, CommandResult};

/// The root command implementation.
pub struct RootCommand {
    descriptor: Descriptor,
}

impl RootCommand {
    /// Create a new root command.
    pub fn new(descriptor: Descriptor) -> Self {
        Self { descriptor }
    }
}

impl Command for RootCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.descriptor.project_root() {
            Ok(root) => {
                ui.value(&root.display().to_string());
                Ok(CommandResult::success())
            }
            Err(e) => report_resolution_error(e, ui),
        }
    }
}
