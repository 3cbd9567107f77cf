//! The observable navigation path.
//!
//! The path is the only externally meaningful state. It changes strictly by
//! append (push) or truncation (pop, pop-to-root), and every change is
//! delivered to subscribers synchronously, in the order it happened, carrying
//! the post-mutation path.

use core::slice;

use crate::id::NavigationId;

/// Ordered identifiers from root (first) to top (last).
///
/// Read-only outside this crate; only the controller mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPath {
    ids: Vec<NavigationId>,
}

impl NavigationPath {
    /// An empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The identifiers, root first.
    #[must_use]
    pub fn as_slice(&self) -> &[NavigationId] {
        &self.ids
    }

    /// Number of pushed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether only the root is showing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The top (visible) identifier.
    #[must_use]
    pub fn last(&self) -> Option<NavigationId> {
        self.ids.last().copied()
    }

    /// Whether `id` occurs anywhere in the path.
    #[must_use]
    pub fn contains(&self, id: &NavigationId) -> bool {
        self.ids.contains(id)
    }

    /// How many times `id` occurs. More than one only after an id collision.
    #[must_use]
    pub fn occurrences(&self, id: &NavigationId) -> usize {
        self.ids.iter().filter(|candidate| *candidate == id).count()
    }

    /// Iterate root to top.
    pub fn iter(&self) -> slice::Iter<'_, NavigationId> {
        self.ids.iter()
    }

    pub(crate) fn append(&mut self, id: NavigationId) {
        self.ids.push(id);
    }

    pub(crate) fn remove_last(&mut self) -> Option<NavigationId> {
        self.ids.pop()
    }

    /// Truncate to empty, returning how many entries were removed.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.ids.len();
        self.ids.clear();
        removed
    }
}

impl<'a> IntoIterator for &'a NavigationPath {
    type Item = &'a NavigationId;
    type IntoIter = slice::Iter<'a, NavigationId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// What a single mutation did to a path of `K` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathChange<K = NavigationId> {
    /// An entry was appended.
    Pushed(K),
    /// The top entry was removed.
    Popped(K),
    /// The path was truncated to empty; `removed` entries were dropped
    /// (zero when it was already empty).
    Reset {
        /// Number of entries removed.
        removed: usize,
    },
}

/// Notification delivered to observers after a mutation completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEvent<'a, K = NavigationId> {
    /// The mutation that just happened.
    pub change: PathChange<K>,
    /// The path after the mutation.
    pub path: &'a [K],
}

impl<K> PathEvent<'_, K> {
    /// Path length after the mutation.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer<K> = Box<dyn FnMut(&PathEvent<'_, K>)>;

/// Subscriber list notified synchronously, in subscription order.
pub(crate) struct Observers<K> {
    next: u64,
    entries: Vec<(Subscription, Observer<K>)>,
}

impl<K> Observers<K> {
    pub(crate) fn new() -> Self {
        Self {
            next: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&PathEvent<'_, K>) + 'static,
    {
        let subscription = Subscription(self.next);
        self.next = self.next.wrapping_add(1);
        self.entries.push((subscription, Box::new(observer)));
        subscription
    }

    pub(crate) fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(candidate, _)| *candidate != subscription);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, event: &PathEvent<'_, K>) {
        for (_, observer) in &mut self.entries {
            observer(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K> Default for Observers<K> {
    fn default() -> Self {
        Self::new()
    }
}
