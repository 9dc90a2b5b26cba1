//! Environment resolution.
//!
//! Resolves the active environment using the priority chain:
//! 1. Process environment variable (e.g. `PROJECT_ENVIRONMENT`)
//! 2. Environment file in the project root (e.g. `.environment`)
//! 3. Configured default
//!
//! When none of them applies, resolution fails with
//! [`ProjenvError::EnvironmentUndetermined`].

use std::env::VarError;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::file::read_environment_file;
use crate::config::EnvironmentSettings;
use crate::error::{ProjenvError, Result};

/// How the environment was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentSource {
    /// Read from the named process environment variable.
    Variable(String),
    /// Read from the environment file at this path.
    File(PathBuf),
    /// The configured default.
    Default,
}

impl std::fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(var) => write!(f, "${}", var),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved environment with its name and how it was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    /// The environment name (e.g., "development", "production").
    pub name: String,
    /// How this environment was determined.
    pub source: EnvironmentSource,
}

impl ResolvedEnvironment {
    /// Resolve the environment for `root` from the process environment.
    ///
    /// # Example
    ///
    /// ```
    /// use projenv::config::EnvironmentSettings;
    /// use projenv::environment::{EnvironmentSource, ResolvedEnvironment};
    /// use tempfile::TempDir;
    ///
    /// let temp = TempDir::new().unwrap();
    /// let settings = EnvironmentSettings::default()
    ///     .with_var_name("PROJENV_DOCTEST_UNSET")
    ///     .with_default("development");
    ///
    /// let resolved = ResolvedEnvironment::resolve(temp.path(), &settings).unwrap();
    /// assert_eq!(resolved.name, "development");
    /// assert_eq!(resolved.source, EnvironmentSource::Default);
    /// ```
    pub fn resolve(root: &Path, settings: &EnvironmentSettings) -> Result<Self> {
        Self::resolve_with_env(root, settings, |key| std::env::var(key))
    }

    /// Resolve with a custom env var lookup (for testing).
    pub fn resolve_with_env<F>(root: &Path, settings: &EnvironmentSettings, env_fn: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        // 1. Process environment variable
        match env_fn(&settings.var_name) {
            Ok(name) if !name.is_empty() => {
                debug!("Environment '{}' from ${}", name, settings.var_name);
                return Ok(Self {
                    name,
                    source: EnvironmentSource::Variable(settings.var_name.clone()),
                });
            }
            Ok(_) | Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(raw)) => {
                warn!(?raw, "${} is not valid UTF-8, ignoring it", settings.var_name);
            }
        }

        // 2. Environment file
        let path = root.join(&settings.file_name);
        if let Some(name) = read_environment_file(&path, settings.empty_file)? {
            debug!("Environment '{}' from {}", name, path.display());
            return Ok(Self {
                name,
                source: EnvironmentSource::File(path),
            });
        }

        // 3. Configured default
        if let Some(name) = &settings.default {
            debug!("Environment '{}' from configured default", name);
            return Ok(Self {
                name: name.clone(),
                source: EnvironmentSource::Default,
            });
        }

        Err(ProjenvError::EnvironmentUndetermined {
            path,
            var_name: settings.var_name.clone(),
        })
    }
}

/// Resolve just the environment name for `root`.
pub fn resolve_environment(root: &Path, settings: &EnvironmentSettings) -> Result<String> {
    ResolvedEnvironment::resolve(root, settings).map(|resolved| resolved.name)
}
