//! Show command implementation.
//!
//! `projenv show` prints the resolved environment.

use serde_json::json;

use crate::cli::args::ShowArgs;
use crate::environment::{Descriptor, EnvironmentSource};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{report_resolution_error, Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    descriptor: Descriptor,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(descriptor: Descriptor, args: ShowArgs) -> Self {
        Self { descriptor, args }
    }
}

fn source_kind(source: &EnvironmentSource) -> &'static str {
    match source {
        EnvironmentSource::Variable(_) => "variable",
        EnvironmentSource::File(_) => "file",
        EnvironmentSource::Default => "default",
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = match self.descriptor.resolved() {
            Ok(resolved) => resolved,
            Err(e) => return report_resolution_error(e, ui),
        };
        let root = self.descriptor.project_root()?;

        // An environment file that exists but fell through was empty.
        if matches!(resolved.source, EnvironmentSource::Default) {
            let file = root.join(self.descriptor.file_name());
            if file.is_file() {
                ui.warning(&format!(
                    "{} is empty; using the default environment",
                    file.display()
                ));
            }
        }

        if self.args.json {
            let output = json!({
                "environment": resolved.name,
                "source": source_kind(&resolved.source),
                "from": resolved.source.to_string(),
                "root": root.display().to_string(),
            });
            ui.value(&serde_json::to_string_pretty(&output).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        ui.value(&resolved.name);
        if ui.output_mode().shows_details() {
            ui.key_value("source", &resolved.source.to_string());
            ui.key_value("root", &root.display().to_string());
        }

        Ok(CommandResult::success())
    }
}
