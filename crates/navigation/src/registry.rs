//! Identifier to destination mapping.
//!
//! Only keyed lookup matters: insertion order and size carry no meaning.
//! Collisions are last-write-wins.

use std::collections::{HashMap, HashSet};

use crate::content::{Content, Destination};
use crate::id::NavigationId;

/// Side-table of content factories keyed by [`NavigationId`].
#[derive(Default)]
pub struct DestinationRegistry {
    destinations: HashMap<NavigationId, Destination>,
}

impl DestinationRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `destination` under `id`.
    ///
    /// Returns `true` when an existing entry was overwritten.
    pub fn insert(&mut self, id: NavigationId, destination: Destination) -> bool {
        let overwritten = self.destinations.insert(id, destination).is_some();
        if overwritten {
            tracing::warn!(%id, "destination overwritten; last write wins");
        }
        overwritten
    }

    /// Remove the entry for `id`. Returns `true` if one existed.
    pub fn remove(&mut self, id: &NavigationId) -> bool {
        self.destinations.remove(id).is_some()
    }

    /// Build the content for `id`, or `None` if the entry is missing.
    #[must_use]
    pub fn resolve(&self, id: &NavigationId) -> Option<Content> {
        self.destinations.get(id).map(|destination| destination())
    }

    /// Drop every entry whose id is not in `keep`. Returns how many were dropped.
    pub fn retain_only<'a, I>(&mut self, keep: I) -> usize
    where
        I: IntoIterator<Item = &'a NavigationId>,
    {
        let keep: HashSet<&NavigationId> = keep.into_iter().collect();
        let before = self.destinations.len();
        self.destinations.retain(|id, _| keep.contains(id));
        before.saturating_sub(self.destinations.len())
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.destinations.clear();
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl core::fmt::Debug for DestinationRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DestinationRegistry")
            .field("len", &self.destinations.len())
            .finish_non_exhaustive()
    }
}
