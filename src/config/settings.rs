//! Settings schema.
//!
//! These are the knobs a profile can turn: which variable to consult, which
//! file to read, what to fall back to, and which extra markers identify the
//! project root.

use serde::{Deserialize, Serialize};

use crate::root::MarkerList;

/// Variable consulted before the environment file.
pub const DEFAULT_VAR_NAME: &str = "PROJECT_ENVIRONMENT";

/// File read from the project root.
pub const DEFAULT_FILE_NAME: &str = ".environment";

/// What an environment file with no content means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyFilePolicy {
    /// Treat the file as absent and continue to the default.
    #[default]
    FallThrough,
    /// Return the empty string.
    Accept,
}

/// Resolution settings for a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSettings {
    /// Markers tested before the built-in ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_markers: Vec<String>,

    /// Process environment variable that overrides everything else.
    pub var_name: String,

    /// Environment file name, relative to the project root.
    pub file_name: String,

    /// Value used when neither the variable nor the file yields one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Handling of an environment file that is empty.
    pub empty_file: EmptyFilePolicy,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            extra_markers: Vec::new(),
            var_name: DEFAULT_VAR_NAME.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            default: None,
            empty_file: EmptyFilePolicy::default(),
        }
    }
}

impl EnvironmentSettings {
    /// The effective marker list: extra markers first, then the defaults.
    pub fn markers(&self) -> MarkerList {
        MarkerList::default().with_prepended(self.extra_markers.iter().cloned())
    }

    pub fn with_var_name(mut self, name: impl Into<String>) -> Self {
        self.var_name = name.into();
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_empty_file(mut self, policy: EmptyFilePolicy) -> Self {
        self.empty_file = policy;
        self
    }

    /// Add markers ahead of the ones already configured.
    pub fn with_extra_markers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut extra: Vec<String> = names.into_iter().map(Into::into).collect();
        extra.append(&mut self.extra_markers);
        self.extra_markers = extra;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let settings = EnvironmentSettings::default();
        assert_eq!(settings.var_name, "PROJECT_ENVIRONMENT");
        assert_eq!(settings.file_name, ".environment");
        assert!(settings.default.is_none());
        assert_eq!(settings.empty_file, EmptyFilePolicy::FallThrough);
        assert_eq!(settings.markers(), MarkerList::default());
    }

    #[test]
    fn extra_markers_are_prepended() {
        let settings = EnvironmentSettings::default()
            .with_extra_markers(["b.txt"])
            .with_extra_markers(["a.txt"]);
        let markers = settings.markers();
        let names: Vec<&str> = markers.iter().take(3).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "Cargo.toml"]);
    }

    #[test]
    fn builder_sets_fields() {
        let settings = EnvironmentSettings::default()
            .with_var_name("APP_ENV")
            .with_file_name("ENVIRONMENT")
            .with_default("production")
            .with_empty_file(EmptyFilePolicy::Accept);
        assert_eq!(settings.var_name, "APP_ENV");
        assert_eq!(settings.file_name, "ENVIRONMENT");
        assert_eq!(settings.default.as_deref(), Some("production"));
        assert_eq!(settings.empty_file, EmptyFilePolicy::Accept);
    }

    #[test]
    fn empty_file_policy_serializes_snake_case() {
        let yaml = serde_yaml::to_string(&EmptyFilePolicy::FallThrough).unwrap();
        assert_eq!(yaml.trim(), "fall_through");
    }

    #[test]
    fn default_settings_skip_empty_fields() {
        let yaml = serde_yaml::to_string(&EnvironmentSettings::default()).unwrap();
        assert!(!yaml.contains("extra_markers"));
        assert!(!yaml.contains("default:"));
        assert!(yaml.contains("var_name: PROJECT_ENVIRONMENT"));
    }
}
