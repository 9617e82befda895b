//! Continuous similarity between truth-value components.

use syllog_core::config::SimilarityConfig;

/// Similarity of two `f` or `c` values in `[floor, 1]`.
///
/// `1.0` within `plateau`, `floor` beyond `cutoff`, and a polynomial decay
/// from `1.0` down to `floor` in between. Non-finite input scores `floor`.
pub fn similarity(a: f64, b: f64, config: &SimilarityConfig) -> f64 {
    let diff = (a - b).abs();
    if !diff.is_finite() || diff > config.cutoff {
        return config.floor;
    }
    if diff <= config.plateau {
        return 1.0;
    }
    let normalized = (diff - config.plateau) / (config.cutoff - config.plateau);
    config.floor + (1.0 - config.floor) * (1.0 - normalized).powf(config.exponent)
}
