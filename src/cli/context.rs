//! Descriptor construction from global flags.
//!
//! Flags are layered on top of the settings file (if any), which is layered
//! on top of the built-in defaults.

use std::path::Path;

use tracing::debug;

use super::args::Cli;
use crate::config::{load_settings_file, EmptyFilePolicy, EnvironmentSettings};
use crate::environment::{Descriptor, Overrides};
use crate::error::Result;

/// Merge the settings file and flags into one set of settings.
///
/// # Errors
///
/// Returns `ConfigNotFound` or `ConfigParseError` for a bad `--config`.
pub fn build_settings(cli: &Cli) -> Result<EnvironmentSettings> {
    let mut settings = match &cli.config {
        Some(path) => {
            debug!("Loading settings from {}", path.display());
            load_settings_file(path)?
        }
        None => EnvironmentSettings::default(),
    };

    if let Some(name) = &cli.var_name {
        settings.var_name = name.clone();
    }
    if let Some(name) = &cli.file_name {
        settings.file_name = name.clone();
    }
    if let Some(default) = &cli.default {
        settings.default = Some(default.clone());
    }
    if cli.accept_empty {
        settings.empty_file = EmptyFilePolicy::Accept;
    }
    if !cli.markers.is_empty() {
        settings = settings.with_extra_markers(cli.markers.iter().cloned());
    }

    Ok(settings)
}

/// Build the descriptor the commands resolve against.
///
/// `cwd` is used as the start directory unless `--start` is given.
pub fn build_descriptor(cli: &Cli, cwd: &Path) -> Result<Descriptor> {
    let settings = build_settings(cli)?;
    let start = cli.start.clone().unwrap_or_else(|| cwd.to_path_buf());

    let mut overrides = Overrides::new();
    if let Some(root) = &cli.root {
        overrides = overrides.project_root(root);
    }

    Ok(Descriptor::with_overrides(start, settings, overrides))
}
