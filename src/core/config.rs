//! Engine configuration.

use serde::{Deserialize, Serialize};

/// How a rational update with a zero denominator is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroDenominatorPolicy {
    /// Return `ValueError::ZeroDenominator` and leave the value unchanged.
    #[default]
    Reject,
    /// Store the legacy sentinel `±i32::MAX / 1`.
    ///
    /// Kept for compatibility with outputs of older tools. The sentinel is
    /// finite and does not behave like an unbounded value.
    LegacySentinel,
}

/// Engine configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Largest accepted vertex count (`None` = unlimited).
    pub max_vertices: Option<usize>,

    /// Refuse moves once the position has a winner.
    /// Off by default: the engine accepts moves on a finished board.
    pub strict_termination: bool,
}

impl EngineConfig {
    /// Create a new config with a vertex limit.
    #[must_use]
    pub fn with_max_vertices(mut self, limit: usize) -> Self {
        self.max_vertices = Some(limit);
        self
    }

    /// Create a new config that refuses moves after the game is won.
    #[must_use]
    pub fn with_strict_termination(mut self, strict: bool) -> Self {
        self.strict_termination = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_vertices, None);
        assert!(!config.strict_termination);
        assert_eq!(ZeroDenominatorPolicy::default(), ZeroDenominatorPolicy::Reject);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_max_vertices(64)
            .with_strict_termination(true);

        assert_eq!(config.max_vertices, Some(64));
        assert!(config.strict_termination);
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_max_vertices(10);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
