//! Path-keyed, load-once resource caches.
//!
//! The context owns one cache per resource kind (fonts, textures). An
//! `acquire` by path loads at most once for the cache's lifetime and hands
//! back a copyable handle; repeated acquires of the same path return the same
//! handle and therefore the same loaded instance. A failed load is returned
//! to the caller and is *not* remembered — a later acquire of the same path
//! attempts the load again.
//!
//! Handles carry the cache generation they were minted in. `clear` bumps the
//! generation, so handles from before a context shutdown are rejected instead
//! of resolving to whatever lands in the same slot later.
//!
//! There is no eviction. Entries live as long as the cache, an intentional
//! trade-off for the small, finite asset sets these contexts serve. Callers
//! needing bounded memory must layer their own policy above this.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Handle to a font held by the context's font cache.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) Slot);

/// Handle to a texture held by the context's texture cache.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub(crate) Slot);

/// Cache slot reference: entry index plus the generation it belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) struct Slot {
    pub index: usize,
    pub generation: u32,
}

/// Generic store behind [`FontId`]/[`TextureId`].
///
/// Indices are stable within a generation because entries are never removed
/// individually; `clear` invalidates all outstanding handles at once (used on
/// context shutdown) by advancing the generation.
#[derive(Debug)]
pub(crate) struct ResourceCache<R> {
    by_path: HashMap<PathBuf, usize>,
    entries: Vec<R>,
    generation: u32,
}

impl<R> ResourceCache<R> {
    pub fn new() -> Self {
        Self { by_path: HashMap::new(), entries: Vec::new(), generation: 0 }
    }

    /// Returns the slot for `path`, loading on first reference.
    ///
    /// `load` runs only on a cache miss; its error propagates without
    /// inserting anything.
    pub fn acquire<F>(&mut self, path: &Path, load: F) -> Result<Slot>
    where
        F: FnOnce(&Path) -> Result<R>,
    {
        if let Some(&index) = self.by_path.get(path) {
            return Ok(Slot { index, generation: self.generation });
        }

        let resource = load(path)?;
        let index = self.entries.len();
        self.entries.push(resource);
        self.by_path.insert(path.to_path_buf(), index);
        log::debug!("cached resource {} (#{index})", path.display());
        Ok(Slot { index, generation: self.generation })
    }

    /// Resolves a slot; `None` for out-of-range indices and for slots minted
    /// before the last `clear`.
    pub fn get(&self, slot: Slot) -> Option<&R> {
        if slot.generation != self.generation {
            return None;
        }
        self.entries.get(slot.index)
    }

    pub fn clear(&mut self) {
        self.by_path.clear();
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;

    #[test]
    fn same_path_returns_same_entry_and_loads_once() {
        let mut cache: ResourceCache<String> = ResourceCache::new();
        let loads = Cell::new(0);

        let load = |p: &Path| {
            loads.set(loads.get() + 1);
            Ok(p.display().to_string())
        };

        let a = cache.acquire(Path::new("a.ttf"), load).unwrap();
        let b = cache.acquire(Path::new("a.ttf"), load).unwrap();

        assert_eq!(a, b);
        assert_eq!(loads.get(), 1);
        assert_eq!(cache.len(), 1);
        assert!(std::ptr::eq(cache.get(a).unwrap(), cache.get(b).unwrap()));
    }

    #[test]
    fn distinct_paths_get_distinct_entries() {
        let mut cache: ResourceCache<u32> = ResourceCache::new();
        let a = cache.acquire(Path::new("a"), |_| Ok(1)).unwrap();
        let b = cache.acquire(Path::new("b"), |_| Ok(2)).unwrap();
        assert_ne!(a, b);
        assert_eq!(cache.get(a), Some(&1));
        assert_eq!(cache.get(b), Some(&2));
    }

    #[test]
    fn failed_load_is_not_cached_and_retries() {
        let mut cache: ResourceCache<u32> = ResourceCache::new();
        let attempts = Cell::new(0);

        let load = |p: &Path| -> Result<u32> {
            attempts.set(attempts.get() + 1);
            Err(Error::resource_load(p, "missing"))
        };

        assert!(cache.acquire(Path::new("missing.png"), load).is_err());
        assert!(cache.acquire(Path::new("missing.png"), load).is_err());
        assert_eq!(attempts.get(), 2);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn clear_invalidates_old_slots_even_when_reused() {
        let mut cache: ResourceCache<u32> = ResourceCache::new();
        let old = cache.acquire(Path::new("a"), |_| Ok(1)).unwrap();

        cache.clear();
        let new = cache.acquire(Path::new("b"), |_| Ok(2)).unwrap();

        // Same index, different generation: the old slot must not resolve
        // to the new entry.
        assert_eq!(old.index, new.index);
        assert_ne!(old, new);
        assert_eq!(cache.get(old), None);
        assert_eq!(cache.get(new), Some(&2));
    }
}
