//! Project root discovery.
//!
//! A project root is the nearest ancestor directory of a start path that
//! contains any entry of a [`MarkerList`]. Only existence is checked, so a
//! marker can be a file (`Cargo.toml`) or a directory (`.git`).

pub mod locator;
pub mod markers;

pub use locator::{absolute_path, locate_root, source_dir, RootLocator};
pub use markers::{MarkerList, DEFAULT_MARKERS};
