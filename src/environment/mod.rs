//! Environment resolution.
//!
//! Determines which environment (development, testing, production, ...) the
//! application runs in. The priority chain is:
//!
//! 1. The profile's process environment variable
//! 2. The environment file in the project root
//! 3. The profile's default
//!
//! [`Environment`] is the typed façade, [`Descriptor`] the runtime one, and
//! [`IdentityCache`] keeps one shared instance per profile.

pub mod cache;
pub mod descriptor;
pub mod file;
pub mod profile;
pub mod resolver;

pub use cache::IdentityCache;
pub use descriptor::{Descriptor, Overrides};
pub use file::read_environment_file;
pub use profile::{ensure_concrete, BaseEnvironment, Environment, ProjectEnvironment};
pub use resolver::{resolve_environment, EnvironmentSource, ResolvedEnvironment};
