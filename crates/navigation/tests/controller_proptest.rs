//! Property-based tests for the navigation controller.
//! Verifies the path/registry invariants for arbitrary operation sequences.

use navigation::{ControllerConfig, NavigationController, NavigationError, Text};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push,
    Pop,
    PopToRoot,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Push),
        2 => Just(Op::Pop),
        1 => Just(Op::PopToRoot),
    ]
}

fn page(n: usize) -> impl Fn() -> Text {
    move || Text::new(format!("Page {n}"), "")
}

proptest! {
    /// After N pushes the depth is N and every pushed id resolves immediately.
    #[test]
    fn pushes_grow_depth_and_resolve(n in 0usize..64) {
        let mut nav = NavigationController::new();
        for i in 0..n {
            let id = nav.push(page(i));
            let expected = format!("Page {i}");
            prop_assert_eq!(nav.resolve(&id).map(|c| c.title().to_owned()), Some(expected));
        }
        prop_assert_eq!(nav.depth(), n);
    }

    /// pop_to_root always empties the path, whatever the prior depth.
    #[test]
    fn pop_to_root_always_empties(n in 0usize..32) {
        let mut nav = NavigationController::new();
        for i in 0..n {
            nav.push(page(i));
        }
        nav.pop_to_root();
        prop_assert!(nav.is_empty());
        prop_assert_eq!(nav.registry_len(), 0);
    }

    /// push followed by pop restores the exact previous path.
    #[test]
    fn push_pop_round_trip(n in 0usize..32) {
        let mut nav = NavigationController::new();
        for i in 0..n {
            nav.push(page(i));
        }
        let before = nav.path().clone();
        let id = nav.push(page(n));
        prop_assert_eq!(nav.pop(), Ok(Some(id)));
        prop_assert_eq!(nav.path(), &before);
    }

    /// Under the default policy every id on the path resolves and nothing
    /// else is kept in the registry.
    #[test]
    fn prune_keeps_registry_in_step_with_path(ops in prop::collection::vec(op(), 0..128)) {
        let mut nav = NavigationController::new();
        for (i, op) in ops.into_iter().enumerate() {
            match op {
                Op::Push => {
                    nav.push(page(i));
                }
                Op::Pop => {
                    let was_empty = nav.is_empty();
                    let result = nav.pop();
                    prop_assert_eq!(result.is_err(), was_empty);
                }
                Op::PopToRoot => nav.pop_to_root(),
            }
            for id in nav.path() {
                prop_assert!(nav.resolve(id).is_some());
            }
            prop_assert_eq!(nav.registry_len(), nav.depth());
        }
    }

    /// Retention never loses an entry that is still on the path.
    #[test]
    fn retain_still_resolves_path(ops in prop::collection::vec(op(), 0..128)) {
        let mut nav = NavigationController::with_config(ControllerConfig::CACHING);
        for (i, op) in ops.into_iter().enumerate() {
            match op {
                Op::Push => {
                    nav.push(page(i));
                }
                Op::Pop => {
                    let _ = nav.pop();
                }
                Op::PopToRoot => nav.pop_to_root(),
            }
            for id in nav.path() {
                prop_assert!(nav.resolve(id).is_some());
            }
            prop_assert!(nav.registry_len() >= nav.depth());
        }
        nav.purge_detached();
        prop_assert_eq!(nav.registry_len(), nav.depth());
    }

    /// Repeated empty pops fail identically, however many times they run.
    #[test]
    fn empty_pop_is_consistent(repeats in 1usize..16) {
        let mut strict = NavigationController::new();
        let mut lenient = NavigationController::with_config(ControllerConfig::LENIENT);
        for _ in 0..repeats {
            prop_assert_eq!(strict.pop(), Err(NavigationError::EmptyStack));
            prop_assert_eq!(lenient.pop(), Ok(None));
        }
    }
}
