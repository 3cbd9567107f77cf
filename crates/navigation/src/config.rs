//! Controller configuration.

use serde::{Deserialize, Serialize};

/// What happens to a registry entry once its identifier leaves the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionPolicy {
    /// Remove the entry as soon as the id no longer occurs in the path.
    #[default]
    Prune,
    /// Keep entries until the controller is dropped or
    /// [`purge_detached`](crate::NavigationController::purge_detached) runs.
    Retain,
}

/// How `pop()` treats an empty stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPopPolicy {
    /// Return [`NavigationError::EmptyStack`](crate::NavigationError::EmptyStack).
    #[default]
    Error,
    /// Return `Ok(None)` and leave the stack untouched.
    Ignore,
}

/// Per-controller behaviour, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Registry entry lifetime.
    pub retention: RetentionPolicy,
    /// Empty-stack pop behaviour.
    pub empty_pop: EmptyPopPolicy,
}

impl ControllerConfig {
    /// Prune on pop, fail loudly on an empty pop.
    pub const DEFAULT: Self = Self {
        retention: RetentionPolicy::Prune,
        empty_pop: EmptyPopPolicy::Error,
    };

    /// Keep destinations of popped entries around, fail loudly on an empty pop.
    pub const CACHING: Self = Self {
        retention: RetentionPolicy::Retain,
        empty_pop: EmptyPopPolicy::Error,
    };

    /// Prune on pop, treat an empty pop as a no-op.
    pub const LENIENT: Self = Self {
        retention: RetentionPolicy::Prune,
        empty_pop: EmptyPopPolicy::Ignore,
    };
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::{ControllerConfig, EmptyPopPolicy, RetentionPolicy};

    #[test]
    fn test_default_prunes_and_errors() {
        let config = ControllerConfig::default();
        assert_eq!(config, ControllerConfig::DEFAULT);
        assert_eq!(config.retention, RetentionPolicy::Prune);
        assert_eq!(config.empty_pop, EmptyPopPolicy::Error);
    }

    #[test]
    fn test_presets_differ() {
        assert_eq!(ControllerConfig::CACHING.retention, RetentionPolicy::Retain);
        assert_eq!(ControllerConfig::LENIENT.empty_pop, EmptyPopPolicy::Ignore);
    }

    #[test]
    fn test_deserialize_partial_json_fills_defaults() {
        let config: ControllerConfig = serde_json::from_str(r#"{"retention":"retain"}"#).unwrap();
        assert_eq!(config, ControllerConfig::CACHING);
    }

    #[test]
    fn test_deserialize_empty_object() {
        let config: ControllerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ControllerConfig::DEFAULT);
    }

    #[test]
    fn test_serialize_uses_snake_case() {
        let json = serde_json::to_string(&ControllerConfig::LENIENT).unwrap();
        assert_eq!(json, r#"{"retention":"prune","empty_pop":"ignore"}"#);
    }
}
