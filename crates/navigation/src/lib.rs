//! Navigation layer: an identifier-keyed stack of type-erased destinations.
//!
//! A [`NavigationController`] owns a [`NavigationPath`] (ordered identifiers,
//! root to top) and a [`DestinationRegistry`] (identifier to content factory).
//! Pushing stores a factory under a fresh [`NavigationId`] and appends the id;
//! popping removes the last id. A display layer resolves the path into
//! [`StackFrame`]s and renders them, top frame last.
//!
//! ```
//! use navigation::{NavigationController, Text};
//!
//! let mut nav = NavigationController::new();
//! let second = nav.push(|| Text::new("Second Page", "pushed from home"));
//! assert_eq!(nav.top(), Some(second));
//!
//! nav.pop().unwrap();
//! assert!(nav.is_empty());
//! ```
//!
//! Everything here is single-threaded and synchronous: mutations run on the
//! caller's (UI) thread and observers are notified before the call returns.

#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod id;
pub mod path;
pub mod registry;
pub mod route;
pub mod stack;
pub mod surface;

pub use config::{ControllerConfig, EmptyPopPolicy, RetentionPolicy};
pub use content::{destination, Content, Destination, Renderable, Text};
pub use controller::NavigationController;
pub use error::{NavigationError, Result};
pub use id::NavigationId;
pub use path::{NavigationPath, PathChange, PathEvent, Subscription};
pub use registry::DestinationRegistry;
pub use route::{RouteChange, RouteDestinations, RouteEvent, RouteStack};
pub use stack::StackFrame;
pub use surface::NavigationSurface;
