//! Process-wide identity cache.
//!
//! Maps a type to the one shared instance handed out for it. The map is
//! guarded by a `Mutex` and the lookup, construction and insertion happen
//! under a single lock, so concurrent first calls never construct twice.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::error::Result;

type Entry = Arc<dyn Any + Send + Sync>;

/// A map from type to shared instance.
///
/// # Example
///
/// ```
/// use projenv::environment::IdentityCache;
/// use std::sync::Arc;
///
/// struct Answer(u32);
///
/// let cache = IdentityCache::new();
/// let first = cache.get_or_try_insert_with(|| Ok(Answer(42))).unwrap();
/// let second = cache.get_or_try_insert_with(|| Ok(Answer(7))).unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(second.0, 42);
/// ```
#[derive(Default)]
pub struct IdentityCache {
    entries: Mutex<HashMap<TypeId, Entry>>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cache backing [`Environment::shared`](super::Environment::shared).
    pub fn global() -> &'static IdentityCache {
        static GLOBAL: OnceLock<IdentityCache> = OnceLock::new();
        GLOBAL.get_or_init(IdentityCache::new)
    }

    /// Return the cached `T`, constructing it with `init` on first use.
    ///
    /// If `init` fails nothing is cached and the error is returned. `init`
    /// runs with the cache locked and must not call back into this cache.
    pub fn get_or_try_insert_with<T, F>(&self, init: F) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Result<T>,
    {
        let mut entries = self.lock();

        if let Some(existing) = entries.get(&TypeId::of::<T>()) {
            if let Ok(shared) = Arc::clone(existing).downcast::<T>() {
                return Ok(shared);
            }
        }

        let shared = Arc::new(init()?);
        let entry: Entry = shared.clone();
        entries.insert(TypeId::of::<T>(), entry);
        Ok(shared)
    }

    /// The cached `T`, if one was constructed.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let entries = self.lock();
        entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| Arc::clone(entry).downcast::<T>().ok())
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.lock().contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TypeId, Entry>> {
        // A panic inside `init` leaves the map untouched, so poisoning is harmless.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for IdentityCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityCache")
            .field("entries", &self.len())
            .finish()
    }
}
