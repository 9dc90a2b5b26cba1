//! Markers command implementation.
//!
//! `projenv markers` prints the effective marker list, one per line.

use crate::environment::Descriptor;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The markers command implementation.
pub struct MarkersCommand {
    descriptor: Descriptor,
}

impl MarkersCommand {
    /// Create a new markers command.
    pub fn new(descriptor: Descriptor) -> Self {
        Self { descriptor }
    }
}

impl Command for MarkersCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for marker in self.descriptor.markers().iter() {
            ui.value(marker);
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvironmentSettings;
    use crate::root::DEFAULT_MARKERS;
    use crate::ui::MockUI;

    #[test]
    fn lists_extra_markers_first() {
        let settings = EnvironmentSettings::default().with_extra_markers(["deploy.toml"]);
        let cmd = MarkersCommand::new(Descriptor::new("/", settings));
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.values()[0], "deploy.toml");
        assert_eq!(ui.values().len(), DEFAULT_MARKERS.len() + 1);
    }
}
