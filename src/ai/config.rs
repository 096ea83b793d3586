//! Opponent policy configuration parameters.

use serde::{Deserialize, Serialize};

/// Tuning knobs shared by the reference policies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Random seed for tie-breaking.
    /// Same seed and same position produce the same move.
    pub seed: u64,

    /// Gomoku bonus per unit of closeness to the board center.
    pub centrality_weight: f64,

    /// Reversi score per stone flipped, added to the positional weight.
    pub flip_weight: f64,

    /// Gomoku weight of blocking the opponent relative to extending own lines
    /// (1.0 = equal).
    pub defense_weight: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            centrality_weight: 1.0,
            flip_weight: 1.0,
            defense_weight: 0.9,
        }
    }
}

impl PolicyConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom centrality weight.
    pub fn with_centrality_weight(mut self, weight: f64) -> Self {
        self.centrality_weight = weight;
        self
    }

    /// Create a new config with custom flip weight.
    pub fn with_flip_weight(mut self, weight: f64) -> Self {
        self.flip_weight = weight;
        self
    }

    /// Create a new config with custom defense weight.
    pub fn with_defense_weight(mut self, weight: f64) -> Self {
        self.defense_weight = weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PolicyConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.flip_weight, 1.0);
        assert!(config.defense_weight < 1.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PolicyConfig::default()
            .with_seed(7)
            .with_centrality_weight(0.0)
            .with_defense_weight(1.5);

        assert_eq!(config.seed, 7);
        assert_eq!(config.centrality_weight, 0.0);
        assert_eq!(config.defense_weight, 1.5);
    }

    #[test]
    fn test_serialization() {
        let config = PolicyConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PolicyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
