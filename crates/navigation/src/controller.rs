//! Navigation controller: a path of identifiers plus the registry that
//! renders them.
//!
//! Push stores the destination first and then appends its id, so an id on the
//! path always has an entry while it stays there. Pop and pop-to-root only
//! truncate. With [`RetentionPolicy::Prune`] the entry of an id that no longer
//! occurs on the path is dropped immediately.

use crate::config::{ControllerConfig, EmptyPopPolicy, RetentionPolicy};
use crate::content::{destination, Content, Destination, Renderable};
use crate::error::{NavigationError, Result};
use crate::id::NavigationId;
use crate::path::{NavigationPath, Observers, PathChange, PathEvent, Subscription};
use crate::registry::DestinationRegistry;
use crate::stack::{self, StackFrame};

/// One navigation stack. Own one per independent navigation surface; nothing
/// is shared between controllers.
pub struct NavigationController {
    config: ControllerConfig,
    path: NavigationPath,
    registry: DestinationRegistry,
    observers: Observers<NavigationId>,
}

impl NavigationController {
    /// Create an empty controller with [`ControllerConfig::DEFAULT`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ControllerConfig::DEFAULT)
    }

    /// Create an empty controller with an explicit configuration.
    #[must_use]
    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            config,
            path: NavigationPath::new(),
            registry: DestinationRegistry::new(),
            observers: Observers::new(),
        }
    }

    /// The configuration this controller was built with.
    #[must_use]
    pub fn config(&self) -> ControllerConfig {
        self.config
    }

    /// Push content under a freshly generated id and return that id.
    pub fn push<F, R>(&mut self, factory: F) -> NavigationId
    where
        F: Fn() -> R + 'static,
        R: Renderable + 'static,
    {
        self.push_with_id(NavigationId::new(), factory)
    }

    /// Push content under an explicit id.
    ///
    /// A colliding id overwrites the existing destination (last write wins);
    /// every occurrence of the id on the path then resolves to the new content.
    pub fn push_with_id<F, R>(&mut self, id: NavigationId, factory: F) -> NavigationId
    where
        F: Fn() -> R + 'static,
        R: Renderable + 'static,
    {
        self.push_destination(id, destination(factory))
    }

    /// Push an already type-erased destination under `id`.
    pub fn push_destination(&mut self, id: NavigationId, destination: Destination) -> NavigationId {
        self.registry.insert(id, destination);
        self.path.append(id);
        tracing::debug!(%id, depth = self.path.len(), "pushed");
        self.notify(PathChange::Pushed(id));
        id
    }

    /// Remove the top entry and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::EmptyStack`] when the stack is empty and the
    /// controller uses [`EmptyPopPolicy::Error`]. Under
    /// [`EmptyPopPolicy::Ignore`] an empty pop returns `Ok(None)`. Observers
    /// are not notified in either case.
    pub fn pop(&mut self) -> Result<Option<NavigationId>> {
        let Some(id) = self.path.remove_last() else {
            return match self.config.empty_pop {
                EmptyPopPolicy::Error => {
                    tracing::warn!("pop on empty navigation stack");
                    Err(NavigationError::EmptyStack)
                }
                EmptyPopPolicy::Ignore => {
                    tracing::debug!("pop on empty navigation stack ignored");
                    Ok(None)
                }
            };
        };

        // A collided id may still occur lower in the path.
        if self.path.contains(&id) {
            tracing::debug!(
                %id,
                remaining = self.path.occurrences(&id),
                "id still on path; destination kept"
            );
        } else if self.config.retention == RetentionPolicy::Prune {
            self.registry.remove(&id);
        }

        tracing::debug!(%id, depth = self.path.len(), "popped");
        self.notify(PathChange::Popped(id));
        Ok(Some(id))
    }

    /// Truncate the path to empty. Always succeeds.
    ///
    /// Observers see a `Reset` even when the path was already empty.
    pub fn pop_to_root(&mut self) {
        let removed = self.path.clear();
        if self.config.retention == RetentionPolicy::Prune {
            self.registry.clear();
        }
        tracing::debug!(removed, "popped to root");
        self.notify(PathChange::Reset { removed });
    }

    /// Drop registry entries whose ids are not on the path.
    ///
    /// Only useful under [`RetentionPolicy::Retain`]; returns how many entries
    /// were removed.
    pub fn purge_detached(&mut self) -> usize {
        let purged = self.registry.retain_only(self.path.iter());
        if purged > 0 {
            tracing::debug!(purged, "purged detached destinations");
        }
        purged
    }

    /// The current path, root first.
    #[must_use]
    pub fn path(&self) -> &NavigationPath {
        &self.path
    }

    /// Number of pushed entries.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Whether only the root is showing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The top (visible) id.
    #[must_use]
    pub fn top(&self) -> Option<NavigationId> {
        self.path.last()
    }

    /// Build the content registered for `id`.
    #[must_use]
    pub fn resolve(&self, id: &NavigationId) -> Option<Content> {
        self.registry.resolve(id)
    }

    /// Number of registry entries.
    #[must_use]
    pub fn registry_len(&self) -> usize {
        self.registry.len()
    }

    /// Resolve the current path into stack frames, root-most first.
    #[must_use]
    pub fn frames(&self) -> Vec<StackFrame> {
        stack::frames(&self.path, &self.registry)
    }

    /// Register a path observer. It runs synchronously after every mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&PathEvent<'_>) + 'static,
    {
        self.observers.subscribe(observer)
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, change: PathChange) {
        let event = PathEvent {
            change,
            path: self.path.as_slice(),
        };
        self.observers.notify(&event);
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NavigationController")
            .field("config", &self.config)
            .field("path", &self.path)
            .field("registry", &self.registry)
            .field("observers", &self.observers.len())
            .finish()
    }
}
