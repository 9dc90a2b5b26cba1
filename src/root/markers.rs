//! Marker file lists.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Names whose presence marks a directory as a project root.
///
/// A dependency manifest, the version-control directory and its submodules
/// file, and two common build descriptors.
pub const DEFAULT_MARKERS: &[&str] = &["Cargo.toml", ".git", ".gitmodules", "Makefile", "justfile"];

/// An ordered list of marker names.
///
/// Custom entries are prepended, so they are tested before the defaults at
/// every directory level.
///
/// # Example
///
/// ```
/// use projenv::root::MarkerList;
///
/// let markers = MarkerList::default().with_prepended(["deploy.toml"]);
/// assert_eq!(markers.as_slice()[0], "deploy.toml");
/// assert!(markers.contains("Cargo.toml"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerList(Vec<String>);

impl MarkerList {
    /// Create a list containing exactly the given names, in order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Return a new list with `names` placed ahead of the current entries.
    ///
    /// Names already present further down are not duplicated.
    pub fn with_prepended<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut merged: Vec<String> = Vec::new();
        for name in names.into_iter().map(Into::into) {
            if !merged.contains(&name) {
                merged.push(name);
            }
        }
        for name in self.0 {
            if !merged.contains(&name) {
                merged.push(name);
            }
        }
        Self(merged)
    }

    /// Whether `name` is in the list.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|m| m == name)
    }

    /// Iterate over the names in test order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for MarkerList {
    fn default() -> Self {
        Self::new(DEFAULT_MARKERS.iter().copied())
    }
}

impl fmt::Display for MarkerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_contains_all_builtin_markers() {
        let markers = MarkerList::default();
        assert_eq!(markers.len(), DEFAULT_MARKERS.len());
        for name in DEFAULT_MARKERS {
            assert!(markers.contains(name));
        }
    }

    #[test]
    fn prepended_entries_come_first() {
        let markers = MarkerList::default().with_prepended(["a.txt", "b.txt"]);
        let names: Vec<&str> = markers.iter().collect();
        assert_eq!(&names[..3], &["a.txt", "b.txt", "Cargo.toml"]);
    }

    #[test]
    fn prepending_existing_name_moves_it_forward() {
        let markers = MarkerList::default().with_prepended([".git"]);
        let names: Vec<&str> = markers.iter().collect();
        assert_eq!(names[0], ".git");
        assert_eq!(names.iter().filter(|n| **n == ".git").count(), 1);
        assert_eq!(markers.len(), DEFAULT_MARKERS.len());
    }

    #[test]
    fn display_joins_with_commas() {
        let markers = MarkerList::new(["one", "two"]);
        assert_eq!(markers.to_string(), "one, two");
    }

    #[test]
    fn empty_list() {
        let markers = MarkerList::new(Vec::<String>::new());
        assert!(markers.is_empty());
    }
}
