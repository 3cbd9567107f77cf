//! Value-based navigation: the path holds typed routes and a single mapping
//! function turns each route into content.
//!
//! This is the "standard" alternative to [`NavigationController`]: routes are
//! plain values (e.g. `Route::Item(4)`) so the path is meaningful on
//! its own and no per-push registry is needed.
//!
//! [`NavigationController`]: crate::NavigationController

use core::fmt;

use crate::config::EmptyPopPolicy;
use crate::content::{Content, Renderable};
use crate::error::{NavigationError, Result};
use crate::path::{Observers, PathChange, PathEvent, Subscription};
use crate::stack;

/// Change notification for a [`RouteStack`].
pub type RouteChange<R> = PathChange<R>;

/// Event delivered to [`RouteStack`] observers.
pub type RouteEvent<'a, R> = PathEvent<'a, R>;

/// Ordered stack of typed routes, root-most first.
pub struct RouteStack<R> {
    routes: Vec<R>,
    empty_pop: EmptyPopPolicy,
    observers: Observers<R>,
}

impl<R: Clone> RouteStack<R> {
    /// An empty stack that errors on an empty pop.
    #[must_use]
    pub fn new() -> Self {
        Self::with_empty_pop(EmptyPopPolicy::Error)
    }

    /// An empty stack with an explicit empty-pop policy.
    #[must_use]
    pub fn with_empty_pop(empty_pop: EmptyPopPolicy) -> Self {
        Self {
            routes: Vec::new(),
            empty_pop,
            observers: Observers::new(),
        }
    }

    /// Append `route`.
    pub fn push(&mut self, route: R) {
        self.routes.push(route.clone());
        tracing::debug!(depth = self.routes.len(), "route pushed");
        self.notify(PathChange::Pushed(route));
    }

    /// Remove and return the top route.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::EmptyStack`] on an empty stack under
    /// [`EmptyPopPolicy::Error`].
    pub fn pop(&mut self) -> Result<Option<R>> {
        let Some(route) = self.routes.pop() else {
            return match self.empty_pop {
                EmptyPopPolicy::Error => {
                    tracing::warn!("pop on empty route stack");
                    Err(NavigationError::EmptyStack)
                }
                EmptyPopPolicy::Ignore => Ok(None),
            };
        };
        tracing::debug!(depth = self.routes.len(), "route popped");
        self.notify(PathChange::Popped(route.clone()));
        Ok(Some(route))
    }

    /// Clear every route. Always succeeds.
    pub fn pop_to_root(&mut self) {
        let removed = self.routes.len();
        self.routes.clear();
        tracing::debug!(removed, "routes popped to root");
        self.notify(PathChange::Reset { removed });
    }

    /// The routes, root-most first.
    #[must_use]
    pub fn routes(&self) -> &[R] {
        &self.routes
    }

    /// The visible route.
    #[must_use]
    pub fn top(&self) -> Option<&R> {
        self.routes.last()
    }

    /// Number of pushed routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether only the root is showing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Register an observer, run synchronously after every mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&RouteEvent<'_, R>) + 'static,
    {
        self.observers.subscribe(observer)
    }

    /// Remove an observer.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }

    fn notify(&mut self, change: RouteChange<R>) {
        let event = PathEvent {
            change,
            path: self.routes.as_slice(),
        };
        self.observers.notify(&event);
    }
}

impl<R: Clone> Default for RouteStack<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps every route of type `R` to content. Registered once per route type.
pub struct RouteDestinations<R> {
    map: Box<dyn Fn(&R) -> Content>,
}

impl<R> RouteDestinations<R> {
    /// Register the mapping function.
    pub fn new<F, V>(map: F) -> Self
    where
        F: Fn(&R) -> V + 'static,
        V: Renderable + 'static,
    {
        Self {
            map: Box::new(move |route: &R| -> Content { Box::new(map(route)) }),
        }
    }

    /// Build the content for `route`.
    #[must_use]
    pub fn resolve(&self, route: &R) -> Content {
        (self.map)(route)
    }

    /// Resolve every route in `routes`, root-most first.
    pub fn resolve_all<'a>(&'a self, routes: &'a [R]) -> impl Iterator<Item = Content> + 'a {
        routes.iter().map(|route| self.resolve(route))
    }

    /// Render `root` followed by the content of every route, top route last.
    ///
    /// Uses the same layout as [`stack::render_stack`].
    ///
    /// # Errors
    ///
    /// Propagates the writer's error.
    pub fn render_stack(
        &self,
        root: &dyn Renderable,
        routes: &[R],
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        let last = routes.len().checked_sub(1);
        stack::write_section(out, last.is_none(), "root", root)?;
        for (index, content) in self.resolve_all(routes).enumerate() {
            stack::write_section(out, Some(index) == last, &index.to_string(), &*content)?;
        }
        Ok(())
    }
}
