//! Reward grading configuration.

use serde::{Deserialize, Serialize};

/// How premise frequency/confidence are compared with the reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TruthMatch {
    /// Weighted by the smooth similarity curve.
    Smooth,
    /// Full credit within `tolerance`, nothing outside it.
    Band { tolerance: f64 },
}

/// Where the reference derivation set comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationSource {
    /// Run the reasoner on the candidate's own reported premises
    /// (self-consistency).
    CandidatePremises,
    /// Run the reasoner on the reference premises.
    ReferencePremises,
    /// Use the reference answer's listed results as-is.
    ReferenceResults,
}

/// Weights, floor, and penalties for the reward grader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    /// Credit per exactly matching discrete field (s, o, cp, eb, r).
    pub discrete_weight: f64,
    /// Credit per premise truth component (f, c).
    pub premise_truth_weight: f64,
    /// Credit per derivation truth component (f, c).
    pub derivation_truth_weight: f64,
    /// Added to the denominator so empty sections cannot divide by zero.
    pub epsilon: f64,
    /// Lowest score ever returned.
    pub floor: f64,
    /// Multiplier applied when the candidate needed regex salvage.
    pub salvage_penalty: f64,
    pub premise_truth_match: TruthMatch,
    pub derivation_source: DerivationSource,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            discrete_weight: 5.0,
            premise_truth_weight: 5.0,
            derivation_truth_weight: 25.0,
            epsilon: 1e-5,
            floor: 0.1,
            salvage_penalty: 0.5,
            premise_truth_match: TruthMatch::Smooth,
            derivation_source: DerivationSource::CandidatePremises,
        }
    }
}
