//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.

pub mod completions;
pub mod dispatcher;
pub mod markers;
pub mod root;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
