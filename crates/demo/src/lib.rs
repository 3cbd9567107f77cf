//! navigation-demo - Demo screens for the navigation controller
//!
//! Two stacks run side by side:
//!
//! - a controller-driven stack (Home, Second, Third pages) where every push
//!   stores a destination under a fresh id, and
//! - a standard list whose path is made of typed [`Route`] values resolved by
//!   a single mapping function.
//!
//! The binary replays a [`DemoScript`] of button taps against a [`DemoApp`]
//! and prints the stacks after every step.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p navigation-demo -- --script crates/demo/scripts/walkthrough.json
//! RUST_LOG=navigation=debug cargo run -p navigation-demo
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod app;
pub mod pages;
pub mod script;

pub use app::{DemoApp, RunReport};
pub use pages::{PageAction, PageKind, Route};
pub use script::{load_config, DemoScript, ScriptError};
