//! projenv - Which environment is this project running in?
//!
//! projenv finds a project's root directory by walking up from the code that
//! asks until a marker file (`Cargo.toml`, `.git`, ...) shows up, then
//! decides the environment name from, in order, a process environment
//! variable, a one-line `.environment` file in the root, and a configured
//! default. Answers are computed once and cached.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Resolution settings and settings-file loading
//! - [`environment`] - Environment resolution, profiles and the shared-instance cache
//! - [`error`] - Error types and result aliases
//! - [`root`] - Project root discovery
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use projenv::environment::{Environment, Overrides, ProjectEnvironment};
//! use std::path::PathBuf;
//! use tempfile::TempDir;
//!
//! struct Service;
//!
//! impl ProjectEnvironment for Service {
//!     const VAR_NAME: &'static str = "SERVICE_DOCTEST_ENV";
//!
//!     fn source_location() -> PathBuf {
//!         projenv::source_location!()
//!     }
//! }
//!
//! let root = TempDir::new().unwrap();
//! std::fs::write(root.path().join(".environment"), "production\n").unwrap();
//!
//! let env = Environment::<Service>::with_overrides(
//!     Overrides::new().project_root(root.path()),
//! )
//! .unwrap();
//! assert_eq!(env.environment().unwrap(), "production");
//! assert_eq!(env.to_string(), "production");
//! assert!(env == "production");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod root;
pub mod ui;

pub use environment::{BaseEnvironment, Environment, ProjectEnvironment};
pub use error::{ProjenvError, Result};
