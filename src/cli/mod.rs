//! Command-line interface for projenv.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`context`] - Building a [`Descriptor`](crate::environment::Descriptor) from global flags
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;
pub mod context;

pub use args::{Cli, Commands, CompletionsArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use context::{build_descriptor, build_settings};
