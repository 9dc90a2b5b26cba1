//! Settings file loading.

use std::fs;
use std::path::Path;

use super::settings::EnvironmentSettings;
use crate::error::{ProjenvError, Result};

/// Load a YAML settings file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_settings_file(path: &Path) -> Result<EnvironmentSettings> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProjenvError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ProjenvError::Io(e)
        }
    })?;

    parse_settings(&content, path)
}

/// Parse YAML content into settings.
///
/// An empty document yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_settings(content: &str, source_path: &Path) -> Result<EnvironmentSettings> {
    if content.trim().is_empty() {
        return Ok(EnvironmentSettings::default());
    }

    serde_yaml::from_str(content).map_err(|e| ProjenvError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
