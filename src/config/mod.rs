//! Environment settings and settings-file loading.
//!
//! - Schema definitions in [`settings`]
//! - YAML loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use projenv::config::{parse_settings, EmptyFilePolicy};
//! use std::path::Path;
//!
//! let yaml = "var_name: APP_ENV\ndefault: development\nextra_markers: [deploy.toml]";
//! let settings = parse_settings(yaml, Path::new("projenv.yml")).unwrap();
//! assert_eq!(settings.var_name, "APP_ENV");
//! assert_eq!(settings.file_name, ".environment");
//! assert_eq!(settings.empty_file, EmptyFilePolicy::FallThrough);
//! assert_eq!(settings.markers().as_slice()[0], "deploy.toml");
//! ```

pub mod loader;
pub mod settings;

pub use loader::{load_settings_file, parse_settings};
pub use settings::{EmptyFilePolicy, EnvironmentSettings, DEFAULT_FILE_NAME, DEFAULT_VAR_NAME};
