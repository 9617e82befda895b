//! Continuous truth-value similarity configuration.

use serde::{Deserialize, Serialize};

/// Shape of the smooth similarity curve used to score `f` and `c`.
///
/// `1.0` inside `plateau`, `floor` beyond `cutoff`, and a polynomial decay of
/// degree `exponent` in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Absolute difference still treated as exact.
    pub plateau: f64,
    /// Absolute difference beyond which the score collapses to `floor`.
    pub cutoff: f64,
    /// Minimum similarity.
    pub floor: f64,
    /// Decay exponent, ≥ 1.
    pub exponent: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            plateau: 0.01,
            cutoff: 0.2,
            floor: 0.1,
            exponent: 2.0,
        }
    }
}
