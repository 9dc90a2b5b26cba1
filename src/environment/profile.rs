//! Typed environment profiles.
//!
//! An application describes its environment once by implementing
//! [`ProjectEnvironment`] on a marker type, then asks [`Environment`] for the
//! answer. [`BaseEnvironment`] is the abstract base: it carries the stock
//! settings but cannot be instantiated.
//!
//! ```
//! use projenv::environment::{Environment, ProjectEnvironment};
//! use std::path::PathBuf;
//!
//! struct Billing;
//!
//! impl ProjectEnvironment for Billing {
//!     const VAR_NAME: &'static str = "BILLING_ENV";
//!     const DEFAULT: Option<&'static str> = Some("development");
//!
//!     fn source_location() -> PathBuf {
//!         projenv::source_location!()
//!     }
//! }
//!
//! let env = Environment::<Billing>::shared().unwrap();
//! assert!(env.project_root().unwrap().join("Cargo.toml").exists());
//! ```

use std::any::{type_name, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::cache::IdentityCache;
use super::descriptor::{Descriptor, Overrides};
use super::resolver::ResolvedEnvironment;
use crate::config::{EmptyFilePolicy, EnvironmentSettings, DEFAULT_FILE_NAME, DEFAULT_VAR_NAME};
use crate::error::{ProjenvError, Result};
use crate::root::MarkerList;

/// Definition-time configuration of a concrete environment profile.
pub trait ProjectEnvironment: 'static {
    /// Process environment variable that overrides everything else.
    const VAR_NAME: &'static str = DEFAULT_VAR_NAME;

    /// Environment file name, relative to the project root.
    const FILE_NAME: &'static str = DEFAULT_FILE_NAME;

    /// Fallback environment.
    const DEFAULT: Option<&'static str> = None;

    /// Markers tested before the built-in ones.
    const EXTRA_MARKERS: &'static [&'static str] = &[];

    /// Handling of an empty environment file.
    const EMPTY_FILE: EmptyFilePolicy = EmptyFilePolicy::FallThrough;

    /// Where the profile is defined; the root search starts here.
    ///
    /// Usually `projenv::source_location!()`.
    fn source_location() -> PathBuf;

    /// Settings assembled from the associated constants.
    fn settings() -> EnvironmentSettings {
        let settings = EnvironmentSettings::default()
            .with_var_name(Self::VAR_NAME)
            .with_file_name(Self::FILE_NAME)
            .with_empty_file(Self::EMPTY_FILE)
            .with_extra_markers(Self::EXTRA_MARKERS.iter().copied());

        match Self::DEFAULT {
            Some(default) => settings.with_default(default),
            None => settings,
        }
    }
}

/// The abstract base profile. Every attempt to build an [`Environment`] for
/// it fails with [`ProjenvError::MustSubclass`].
#[derive(Debug, Clone, Copy)]
pub struct BaseEnvironment;

impl ProjectEnvironment for BaseEnvironment {
    fn source_location() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }
}

/// Reject the abstract base profile.
pub fn ensure_concrete<P: ProjectEnvironment>() -> Result<()> {
    if TypeId::of::<P>() == TypeId::of::<BaseEnvironment>() {
        return Err(ProjenvError::MustSubclass {
            type_name: type_name::<P>(),
        });
    }
    Ok(())
}

/// The resolved environment for profile `P`.
///
/// [`new`](Self::new) builds a fresh instance that resolves on its own.
/// [`shared`](Self::shared) returns the process-wide instance for `P`,
/// creating it on first use; its values never change afterwards.
pub struct Environment<P: ProjectEnvironment> {
    descriptor: Descriptor,
    _profile: PhantomData<fn() -> P>,
}

impl<P: ProjectEnvironment> Environment<P> {
    /// Build a fresh, uncached instance.
    ///
    /// # Errors
    ///
    /// Returns `MustSubclass` when `P` is [`BaseEnvironment`].
    pub fn new() -> Result<Self> {
        Self::with_overrides(Overrides::default())
    }

    /// Build a fresh, uncached instance with construction-time overrides.
    pub fn with_overrides(overrides: Overrides) -> Result<Self> {
        ensure_concrete::<P>()?;
        Ok(Self {
            descriptor: Descriptor::with_overrides(P::source_location(), P::settings(), overrides),
            _profile: PhantomData,
        })
    }

    /// The shared instance for `P`.
    pub fn shared() -> Result<Arc<Self>> {
        Self::shared_with(Overrides::default())
    }

    /// The shared instance for `P`, built with `overrides` if it does not
    /// exist yet. Once it exists, `overrides` are ignored.
    pub fn shared_with(overrides: Overrides) -> Result<Arc<Self>> {
        IdentityCache::global().get_or_try_insert_with(|| Self::with_overrides(overrides))
    }

    /// The untyped descriptor behind this instance.
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn project_root(&self) -> Result<&Path> {
        self.descriptor.project_root()
    }

    pub fn resolved(&self) -> Result<&ResolvedEnvironment> {
        self.descriptor.resolved()
    }

    pub fn environment(&self) -> Result<&str> {
        self.descriptor.environment()
    }

    /// Alias for [`environment`](Self::environment).
    pub fn env(&self) -> Result<&str> {
        self.descriptor.env()
    }

    /// Alias for [`environment`](Self::environment).
    pub fn project_environment(&self) -> Result<&str> {
        self.descriptor.project_environment()
    }

    pub fn markers(&self) -> MarkerList {
        self.descriptor.markers()
    }

    pub fn var_name(&self) -> &str {
        self.descriptor.var_name()
    }

    pub fn file_name(&self) -> &str {
        self.descriptor.file_name()
    }

    pub fn default_environment(&self) -> Option<&str> {
        self.descriptor.default_environment()
    }
}

impl<P: ProjectEnvironment> fmt::Display for Environment<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.descriptor, f)
    }
}

impl<P: ProjectEnvironment> fmt::Debug for Environment<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("profile", &type_name::<P>())
            .field("descriptor", &self.descriptor)
            .finish()
    }
}

impl<P: ProjectEnvironment> PartialEq<str> for Environment<P> {
    fn eq(&self, other: &str) -> bool {
        <Descriptor as PartialEq<str>>::eq(&self.descriptor, other)
    }
}

impl<P: ProjectEnvironment> PartialEq<&str> for Environment<P> {
    fn eq(&self, other: &&str) -> bool {
        <Descriptor as PartialEq<str>>::eq(&self.descriptor, other)
    }
}

/// Directory of the source file this macro is invoked in.
///
/// Meant for [`ProjectEnvironment::source_location`].
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::root::source_dir(env!("CARGO_MANIFEST_DIR"), file!())
    };
}
