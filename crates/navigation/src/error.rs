//! Navigation error type.

use thiserror::Error;

/// Errors returned by stack mutations.
///
/// A path identifier with no registry entry is not represented here: the
/// display boundary renders an empty frame for it instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// `pop()` was called on an empty stack under
    /// [`EmptyPopPolicy::Error`](crate::EmptyPopPolicy::Error).
    #[error("cannot pop: navigation stack is empty")]
    EmptyStack,
}

/// Result alias for navigation operations.
pub type Result<T> = core::result::Result<T, NavigationError>;

#[cfg(test)]
mod tests {
    use super::NavigationError;

    #[test]
    fn test_empty_stack_message() {
        assert_eq!(
            NavigationError::EmptyStack.to_string(),
            "cannot pop: navigation stack is empty"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<NavigationError>();
    }
}
