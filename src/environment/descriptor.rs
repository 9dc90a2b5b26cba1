//! Runtime environment descriptor.
//!
//! A [`Descriptor`] pairs a start path with [`EnvironmentSettings`] and
//! resolves the project root and the environment on first access. Both are
//! cached in `OnceLock`s, so a descriptor answers the same way for its whole
//! lifetime even if the variable or the file changes later. Failed lookups
//! are not cached.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::warn;

use super::resolver::ResolvedEnvironment;
use crate::config::EnvironmentSettings;
use crate::error::Result;
use crate::root::{absolute_path, locate_root, MarkerList};

/// Per-construction arguments that take precedence over profile settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Use this directory as the project root instead of searching for one.
    pub project_root: Option<PathBuf>,
    /// Replace the configured default environment.
    pub default: Option<String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    pub fn default_environment(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }
}

/// Lazily resolved project root and environment.
///
/// # Example
///
/// ```
/// use projenv::config::EnvironmentSettings;
/// use projenv::environment::Descriptor;
/// use tempfile::TempDir;
/// use std::fs;
///
/// let temp = TempDir::new().unwrap();
/// fs::create_dir(temp.path().join(".git")).unwrap();
/// fs::write(temp.path().join(".environment"), "staging\n").unwrap();
///
/// let settings = EnvironmentSettings::default().with_var_name("PROJENV_DOCTEST_UNSET");
/// let descriptor = Descriptor::new(temp.path(), settings);
/// assert_eq!(descriptor.project_root().unwrap(), temp.path());
/// assert_eq!(descriptor.environment().unwrap(), "staging");
/// assert_eq!(descriptor.to_string(), "staging");
/// assert!(descriptor == "staging");
/// ```
#[derive(Debug)]
pub struct Descriptor {
    settings: EnvironmentSettings,
    start: PathBuf,
    explicit_root: Option<PathBuf>,
    root: OnceLock<PathBuf>,
    resolved: OnceLock<ResolvedEnvironment>,
}

impl Descriptor {
    /// Create a descriptor that searches upward from `start`.
    pub fn new(start: impl Into<PathBuf>, settings: EnvironmentSettings) -> Self {
        Self {
            settings,
            start: start.into(),
            explicit_root: None,
            root: OnceLock::new(),
            resolved: OnceLock::new(),
        }
    }

    /// Create a descriptor with construction-time overrides applied.
    pub fn with_overrides(
        start: impl Into<PathBuf>,
        mut settings: EnvironmentSettings,
        overrides: Overrides,
    ) -> Self {
        if let Some(default) = overrides.default {
            settings.default = Some(default);
        }

        Self {
            explicit_root: overrides.project_root,
            ..Self::new(start, settings)
        }
    }

    /// The settings this descriptor resolves with.
    pub fn settings(&self) -> &EnvironmentSettings {
        &self.settings
    }

    /// Where the root search starts.
    pub fn start(&self) -> &Path {
        &self.start
    }

    /// Effective marker list, extra markers first.
    pub fn markers(&self) -> MarkerList {
        self.settings.markers()
    }

    pub fn var_name(&self) -> &str {
        &self.settings.var_name
    }

    pub fn file_name(&self) -> &str {
        &self.settings.file_name
    }

    pub fn default_environment(&self) -> Option<&str> {
        self.settings.default.as_deref()
    }

    /// The project root, located on first call. An explicit root is made
    /// absolute instead of searched for.
    ///
    /// # Errors
    ///
    /// Returns `RootNotFound` if no ancestor of the start path holds a marker.
    pub fn project_root(&self) -> Result<&Path> {
        if let Some(root) = self.root.get() {
            return Ok(root.as_path());
        }

        let root = match &self.explicit_root {
            Some(root) => absolute_path(root)?,
            None => locate_root(&self.start, &self.settings.markers())?,
        };
        Ok(self.root.get_or_init(|| root).as_path())
    }

    /// The resolved environment and its source, computed on first call.
    pub fn resolved(&self) -> Result<&ResolvedEnvironment> {
        if let Some(resolved) = self.resolved.get() {
            return Ok(resolved);
        }

        let resolved = ResolvedEnvironment::resolve(self.project_root()?, &self.settings)?;
        Ok(self.resolved.get_or_init(|| resolved))
    }

    /// The environment name.
    ///
    /// # Errors
    ///
    /// Returns `RootNotFound` or `EnvironmentUndetermined` when the
    /// environment cannot be resolved, or `Io` on read failures.
    pub fn environment(&self) -> Result<&str> {
        self.resolved().map(|resolved| resolved.name.as_str())
    }

    /// Alias for [`environment`](Self::environment).
    pub fn env(&self) -> Result<&str> {
        self.environment()
    }

    /// Alias for [`environment`](Self::environment).
    pub fn project_environment(&self) -> Result<&str> {
        self.environment()
    }
}

/// Renders the environment name. An unresolvable descriptor renders as an
/// empty string; call [`Descriptor::environment`] to see why.
impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.environment() {
            Ok(name) => f.write_str(name),
            Err(e) => {
                warn!("Environment could not be resolved: {}", e);
                Ok(())
            }
        }
    }
}

impl PartialEq<str> for Descriptor {
    fn eq(&self, other: &str) -> bool {
        self.environment().is_ok_and(|name| name == other)
    }
}

impl PartialEq<&str> for Descriptor {
    fn eq(&self, other: &&str) -> bool {
        <Self as PartialEq<str>>::eq(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentSource;
    use crate::error::ProjenvError;
    use std::fs;
    use tempfile::TempDir;

    // Variable names no other test sets.
    fn settings(var: &str) -> EnvironmentSettings {
        EnvironmentSettings::default().with_var_name(var)
    }

    fn project(env_file: Option<&str>) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Cargo.toml"), "").unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        if let Some(content) = env_file {
            fs::write(temp.path().join(".environment"), content).unwrap();
        }
        temp
    }

    #[test]
    fn resolves_root_from_nested_start() {
        let temp = project(None);
        let descriptor = Descriptor::new(
            temp.path().join("src"),
            settings("PROJENV_UNIT_DESCRIPTOR_ROOT"),
        );
        assert_eq!(descriptor.project_root().unwrap(), temp.path());
    }

    #[test]
    fn aliases_and_display_agree() {
        let temp = project(Some("develop\n"));
        let descriptor = Descriptor::new(
            temp.path().join("src"),
            settings("PROJENV_UNIT_DESCRIPTOR_ALIASES"),
        );

        let env = descriptor.env().unwrap();
        assert_eq!(env, "develop");
        assert_eq!(descriptor.environment().unwrap(), env);
        assert_eq!(descriptor.project_environment().unwrap(), env);
        assert_eq!(descriptor.to_string(), env);
        assert!(descriptor == "develop");
        assert!(descriptor != "production");
    }

    #[test]
    fn aliases_share_one_cached_value() {
        let temp = project(Some("develop\n"));
        let descriptor = Descriptor::new(temp.path(), settings("PROJENV_UNIT_DESCRIPTOR_PTR"));
        let a = descriptor.environment().unwrap();
        let b = descriptor.env().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn value_is_frozen_after_first_resolution() {
        let temp = project(Some("develop\n"));
        let descriptor = Descriptor::new(temp.path(), settings("PROJENV_UNIT_DESCRIPTOR_FROZEN"));
        assert_eq!(descriptor.environment().unwrap(), "develop");

        fs::write(temp.path().join(".environment"), "production\n").unwrap();
        assert_eq!(descriptor.environment().unwrap(), "develop");

        let fresh = Descriptor::new(temp.path(), settings("PROJENV_UNIT_DESCRIPTOR_FROZEN"));
        assert_eq!(fresh.environment().unwrap(), "production");
    }

    #[test]
    fn explicit_root_skips_search() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".environment"), "qa\n").unwrap();
        let descriptor = Descriptor::with_overrides(
            "/nonexistent/start",
            settings("PROJENV_UNIT_DESCRIPTOR_EXPLICIT"),
            Overrides::new().project_root(temp.path()),
        );
        assert_eq!(descriptor.project_root().unwrap(), temp.path());
        assert_eq!(descriptor.environment().unwrap(), "qa");
    }

    #[test]
    fn relative_start_resolves_from_current_dir() {
        let descriptor = Descriptor::new(".", settings("PROJENV_UNIT_DESCRIPTOR_CWD"));
        let root = descriptor.project_root().unwrap();
        assert!(root.is_absolute());
        assert!(std::env::current_dir().unwrap().starts_with(root));
    }

    #[test]
    fn relative_explicit_root_is_made_absolute() {
        let descriptor = Descriptor::with_overrides(
            "/",
            settings("PROJENV_UNIT_DESCRIPTOR_RELATIVE"),
            Overrides::new().project_root("."),
        );
        let root = descriptor.project_root().unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, std::env::current_dir().unwrap());
    }

    #[test]
    fn explicit_root_dots_are_folded() {
        let temp = project(None);
        let descriptor = Descriptor::with_overrides(
            "/",
            settings("PROJENV_UNIT_DESCRIPTOR_DOTTED"),
            Overrides::new().project_root(temp.path().join("src").join("..")),
        );
        assert_eq!(descriptor.project_root().unwrap(), temp.path());
    }

    #[test]
    fn default_override_replaces_setting() {
        let temp = project(None);
        let descriptor = Descriptor::with_overrides(
            temp.path(),
            settings("PROJENV_UNIT_DESCRIPTOR_DEFAULT").with_default("development"),
            Overrides::new().default_environment("production"),
        );
        assert_eq!(descriptor.default_environment(), Some("production"));
        let resolved = descriptor.resolved().unwrap();
        assert_eq!(resolved.name, "production");
        assert_eq!(resolved.source, EnvironmentSource::Default);
    }

    #[test]
    fn undetermined_environment_renders_empty() {
        let temp = project(None);
        let descriptor = Descriptor::new(temp.path(), settings("PROJENV_UNIT_DESCRIPTOR_NONE"));
        assert!(matches!(
            descriptor.environment(),
            Err(ProjenvError::EnvironmentUndetermined { .. })
        ));
        assert_eq!(descriptor.to_string(), "");
        assert!(descriptor != "");
    }

    #[test]
    fn settings_accessors() {
        let descriptor = Descriptor::new(
            "/srv/app",
            EnvironmentSettings::default()
                .with_var_name("APP_ENV")
                .with_file_name("ENVIRONMENT")
                .with_extra_markers(["deploy.toml"]),
        );
        assert_eq!(descriptor.var_name(), "APP_ENV");
        assert_eq!(descriptor.file_name(), "ENVIRONMENT");
        assert_eq!(descriptor.default_environment(), None);
        assert_eq!(descriptor.markers().as_slice()[0], "deploy.toml");
        assert_eq!(descriptor.start(), Path::new("/srv/app"));
    }
}
