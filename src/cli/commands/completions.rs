//! `projenv completions <shell>`.
//!
//! Prints a completion script covering the global resolution flags
//! (`--start`, `--root`, `--var`, `--file`, `--marker`) and the `show`,
//! `root` and `markers` subcommands. A typical setup is
//! `projenv completions bash > /etc/bash_completion.d/projenv`.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "projenv", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
