//! Error types for projenv operations.
//!
//! This module defines [`ProjenvError`], the error type returned by every
//! fallible operation in the crate, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Setup mistakes (`MustSubclass`, `RootNotFound`, `EnvironmentUndetermined`)
//!   are surfaced immediately and never retried
//! - Filesystem failures other than "not found" propagate unwrapped as `Io`
//! - All messages should tell the user what to change

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for projenv operations.
#[derive(Debug, Error)]
pub enum ProjenvError {
    /// Root resolution was attempted on the abstract base profile.
    #[error("{type_name} is the abstract base profile; define a concrete ProjectEnvironment and use that instead")]
    MustSubclass { type_name: &'static str },

    /// The upward walk reached the filesystem root without finding a marker.
    #[error(
        "Cannot determine project root from {start}: no ancestor contains any of [{markers}]. \
         Set the project root explicitly or create one of these marker files."
    )]
    RootNotFound { start: PathBuf, markers: String },

    /// Neither the variable, the environment file nor a default produced a value.
    #[error(
        "Cannot determine environment: {var_name} is not set, {path} does not exist or is empty, \
         and no default environment is configured"
    )]
    EnvironmentUndetermined { path: PathBuf, var_name: String },

    /// Settings file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for projenv operations.
pub type Result<T> = std::result::Result<T, ProjenvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn must_subclass_names_the_type() {
        let err = ProjenvError::MustSubclass {
            type_name: "projenv::BaseEnvironment",
        };
        assert!(err.to_string().contains("projenv::BaseEnvironment"));
        assert!(err.to_string().contains("abstract"));
    }

    #[test]
    fn root_not_found_explains_how_to_fix() {
        let err = ProjenvError::RootNotFound {
            start: PathBuf::from("/srv/app/lib"),
            markers: "Cargo.toml, .git".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/srv/app/lib"));
        assert!(msg.contains("Cargo.toml, .git"));
        assert!(msg.contains("Set the project root explicitly"));
    }

    #[test]
    fn environment_undetermined_displays_path_and_var() {
        let err = ProjenvError::EnvironmentUndetermined {
            path: PathBuf::from("/srv/app/.environment"),
            var_name: "PROJECT_ENVIRONMENT".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/srv/app/.environment"));
        assert!(msg.contains("PROJECT_ENVIRONMENT"));
        assert!(msg.contains("no default"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ProjenvError::ConfigParseError {
            path: PathBuf::from("/projenv.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/projenv.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ProjenvError = io_err.into();
        assert!(matches!(err, ProjenvError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ProjenvError::ConfigNotFound {
                path: PathBuf::from("missing.yml"),
            })
        }
        assert!(returns_error().is_err());
    }
}
