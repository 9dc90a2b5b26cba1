//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, ShowArgs};
use crate::cli::context::build_descriptor;
use crate::environment::Descriptor;
use crate::error::{ProjenvError, Result};
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Exit code for an error that escaped a command.
///
/// Settings problems exit with 2, everything else with 1.
pub fn exit_code_for(err: &ProjenvError) -> u8 {
    match err {
        ProjenvError::ConfigNotFound { .. } | ProjenvError::ConfigParseError { .. } => 2,
        _ => 1,
    }
}

/// Report a resolution failure and turn it into a failed result.
///
/// Only errors a user fixes by changing their project are reported this
/// way; anything else is propagated.
pub(crate) fn report_resolution_error(
    err: ProjenvError,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    match err {
        ProjenvError::RootNotFound { .. } | ProjenvError::EnvironmentUndetermined { .. } => {
            ui.error(&err.to_string());
            Ok(CommandResult::failure(1))
        }
        other => Err(other),
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    cwd: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher; `cwd` is the default search start.
    pub fn new(cwd: PathBuf) -> Self {
        Self { cwd }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(self.descriptor(cli)?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Root) => {
                let cmd = super::root::RootCommand::new(self.descriptor(cli)?);
                cmd.execute(ui)
            }
            Some(Commands::Markers) => {
                let cmd = super::markers::MarkersCommand::new(self.descriptor(cli)?);
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to show with default args
                let cmd = super::show::ShowCommand::new(self.descriptor(cli)?, ShowArgs::default());
                cmd.execute(ui)
            }
        }
    }

    fn descriptor(&self, cli: &Cli) -> Result<Descriptor> {
        build_descriptor(cli, &self.cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn config_errors_exit_with_two() {
        let err = ProjenvError::ConfigNotFound {
            path: PathBuf::from("x.yml"),
        };
        assert_eq!(exit_code_for(&err), 2);
        let err = ProjenvError::MustSubclass { type_name: "T" };
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn no_command_shows_environment() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Cargo.toml"), "").unwrap();
        fs::write(temp.path().join(".environment"), "develop\n").unwrap();

        let cli = Cli::parse_from(["projenv", "--var", "PROJENV_UNIT_DISPATCH_UNSET"]);
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();
        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.values(), &["develop".to_string()]);
    }

    #[test]
    fn bad_config_propagates() {
        let cli = Cli::parse_from(["projenv", "--config", "/nonexistent/projenv.yml", "root"]);
        let dispatcher = CommandDispatcher::new(PathBuf::from("/"));
        let mut ui = MockUI::new();
        let err = dispatcher.dispatch(&cli, &mut ui).unwrap_err();
        assert_eq!(exit_code_for(&err), 2);
    }
}
