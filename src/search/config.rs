//! Decision engine configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Decision engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Top-level candidate moves sampled per decision (default: 2).
    /// One decision tree is built for each.
    pub candidates: usize,

    /// Children sampled per in-progress node while building a tree (default: 2).
    pub branching: usize,

    /// Random seed for sampling.
    /// Same seed and same boards produce the same moves.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            candidates: 2,
            branching: 2,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom number of top-level candidates.
    pub fn with_candidates(mut self, candidates: usize) -> Self {
        self.candidates = candidates;
        self
    }

    /// Create a new config with a custom branching factor.
    pub fn with_branching(mut self, branching: usize) -> Self {
        self.branching = branching;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject settings that would leave trees or decisions empty.
    pub fn validate(&self) -> Result<(), Error> {
        if self.candidates == 0 {
            return Err(Error::InvalidConfig {
                message: "candidates must be at least 1".to_string(),
            });
        }
        if self.branching == 0 {
            return Err(Error::InvalidConfig {
                message: "branching must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.candidates, 2);
        assert_eq!(config.branching, 2);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_candidates(4)
            .with_branching(3)
            .with_seed(123);

        assert_eq!(config.candidates, 4);
        assert_eq!(config.branching, 3);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(matches!(
            SearchConfig::default().with_candidates(0).validate(),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(matches!(
            SearchConfig::default().with_branching(0).validate(),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
