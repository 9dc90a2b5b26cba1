//! Upward directory walk.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::markers::MarkerList;
use crate::error::{ProjenvError, Result};

/// Finds project roots by walking up from a start path.
///
/// # Example
///
/// ```
/// use projenv::root::{MarkerList, RootLocator};
/// use tempfile::TempDir;
/// use std::fs;
///
/// let temp = TempDir::new().unwrap();
/// fs::write(temp.path().join("Cargo.toml"), "").unwrap();
/// let nested = temp.path().join("src").join("bin");
/// fs::create_dir_all(&nested).unwrap();
///
/// let locator = RootLocator::new(MarkerList::default());
/// assert_eq!(locator.locate(&nested).unwrap(), temp.path());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RootLocator {
    markers: MarkerList,
}

impl RootLocator {
    /// Create a locator testing `markers` in order at each level.
    pub fn new(markers: MarkerList) -> Self {
        Self { markers }
    }

    /// The markers this locator tests.
    pub fn markers(&self) -> &MarkerList {
        &self.markers
    }

    /// Return the nearest ancestor of `start` containing any marker.
    ///
    /// If `start` names a file, the walk begins in the file's directory.
    /// The start is made absolute and `.`/`..` are folded first, so only
    /// true ancestors are tested.
    ///
    /// # Errors
    ///
    /// Returns `RootNotFound` when the filesystem root is reached without a
    /// match, and `Io` if an existence check itself fails.
    pub fn locate(&self, start: &Path) -> Result<PathBuf> {
        let start = absolute_path(start)?;
        let mut current = if start.is_file() {
            start
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start.clone())
        } else {
            start.clone()
        };

        loop {
            if let Some(marker) = self.marker_in(&current)? {
                debug!("Found marker {} in {}", marker, current.display());
                return Ok(current);
            }

            // Move up one directory
            if !current.pop() {
                debug!("No marker found above {}", start.display());
                return Err(ProjenvError::RootNotFound {
                    start,
                    markers: self.markers.to_string(),
                });
            }
        }
    }

    /// First marker present in `dir`, in list order.
    fn marker_in(&self, dir: &Path) -> Result<Option<&str>> {
        for marker in self.markers.iter() {
            if dir.join(marker).try_exists()? {
                return Ok(Some(marker));
            }
        }
        Ok(None)
    }
}

/// Make `path` absolute against the current directory and fold `.` and
/// `..` components lexically. Symlinks are left alone.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Find the project root above `start` using `markers`.
pub fn locate_root(start: &Path, markers: &MarkerList) -> Result<PathBuf> {
    RootLocator::new(markers.clone()).locate(start)
}

/// Directory containing a source file, as reported by `file!()`.
///
/// `file!()` is relative to the directory cargo invoked the compiler from,
/// which is the package directory or one of its workspace ancestors. Each
/// ancestor of `manifest_dir` is tried until the file is found; when it
/// cannot be found (for example in a deployed binary) the joined path under
/// `manifest_dir` is used as is.
///
/// Used by the [`source_location!`](crate::source_location) macro.
pub fn source_dir(manifest_dir: &str, file: &str) -> PathBuf {
    let manifest = Path::new(manifest_dir);
    let file = Path::new(file);

    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        manifest
            .ancestors()
            .map(|dir| dir.join(file))
            .find(|candidate| candidate.is_file())
            .unwrap_or_else(|| manifest.join(file))
    };

    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest.to_path_buf())
}
