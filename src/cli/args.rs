//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// projenv - Report the project root and the environment it runs under.
#[derive(Debug, Parser)]
#[command(name = "projenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true, env = "PROJENV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory to start the root search from (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub start: Option<PathBuf>,

    /// Use this directory as the project root instead of searching
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Environment variable to consult
    #[arg(long = "var", global = true, value_name = "NAME")]
    pub var_name: Option<String>,

    /// Environment file name inside the project root
    #[arg(long = "file", global = true, value_name = "NAME")]
    pub file_name: Option<String>,

    /// Environment to fall back to
    #[arg(long, global = true, value_name = "ENV")]
    pub default: Option<String>,

    /// Extra marker checked before the built-in ones (repeatable)
    #[arg(short, long = "marker", global = true, value_name = "NAME")]
    pub markers: Vec<String>,

    /// Return an empty environment file as-is instead of falling through
    #[arg(long, global = true)]
    pub accept_empty: bool,

    /// Show where values came from
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print values and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved environment (default if no command specified)
    Show(ShowArgs),

    /// Print the project root
    Root,

    /// Print the marker list, in the order it is checked
    Markers,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_has_no_command() {
        let cli = Cli::parse_from(["projenv"]);
        assert!(cli.command.is_none());
        assert!(cli.markers.is_empty());
    }

    #[test]
    fn show_json() {
        let cli = Cli::parse_from(["projenv", "show", "--json"]);
        match cli.command {
            Some(Commands::Show(args)) => assert!(args.json),
            other => panic!("Expected Show command, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "projenv", "root", "--marker", "a.txt", "-m", "b.txt", "--var", "APP_ENV",
        ]);
        assert!(matches!(cli.command, Some(Commands::Root)));
        assert_eq!(cli.markers, vec!["a.txt", "b.txt"]);
        assert_eq!(cli.var_name.as_deref(), Some("APP_ENV"));
    }

    #[test]
    fn resolution_flags() {
        let cli = Cli::parse_from([
            "projenv",
            "--file",
            "ENV",
            "--default",
            "development",
            "--root",
            "/srv/app",
            "--accept-empty",
        ]);
        assert_eq!(cli.file_name.as_deref(), Some("ENV"));
        assert_eq!(cli.default.as_deref(), Some("development"));
        assert_eq!(cli.root, Some(PathBuf::from("/srv/app")));
        assert!(cli.accept_empty);
    }

    #[test]
    fn completions_shell() {
        let cli = Cli::parse_from(["projenv", "completions", "bash"]);
        match cli.command {
            Some(Commands::Completions(args)) => assert_eq!(args.shell, Shell::Bash),
            other => panic!("Expected Completions command, got {:?}", other),
        }
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
