pub mod grading_config;
pub mod parser_config;
pub mod similarity_config;

use serde::{Deserialize, Serialize};

pub use grading_config::{DerivationSource, GradingConfig, TruthMatch};
pub use parser_config::ParserConfig;
pub use similarity_config::SimilarityConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SyllogConfig {
    pub similarity: SimilarityConfig,
    pub grading: GradingConfig,
    pub parser: ParserConfig,
}

impl SyllogConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the grader cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.similarity;
        if !(s.plateau >= 0.0 && s.plateau.is_finite()) {
            return Err(invalid("similarity.plateau", "must be finite and >= 0"));
        }
        if !(s.cutoff > s.plateau && s.cutoff.is_finite()) {
            return Err(invalid("similarity.cutoff", "must be finite and > plateau"));
        }
        if !(0.0..=1.0).contains(&s.floor) {
            return Err(invalid("similarity.floor", "must be in [0, 1]"));
        }
        if !(s.exponent >= 1.0 && s.exponent.is_finite()) {
            return Err(invalid("similarity.exponent", "must be finite and >= 1"));
        }

        let g = &self.grading;
        for (field, weight) in [
            ("grading.discrete_weight", g.discrete_weight),
            ("grading.premise_truth_weight", g.premise_truth_weight),
            ("grading.derivation_truth_weight", g.derivation_truth_weight),
        ] {
            if !(weight >= 0.0 && weight.is_finite()) {
                return Err(invalid(field, "must be finite and >= 0"));
            }
        }
        if !(g.epsilon > 0.0 && g.epsilon.is_finite()) {
            return Err(invalid("grading.epsilon", "must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&g.floor) {
            return Err(invalid("grading.floor", "must be in [0, 1]"));
        }
        if !(g.salvage_penalty > 0.0 && g.salvage_penalty <= 1.0) {
            return Err(invalid("grading.salvage_penalty", "must be in (0, 1]"));
        }
        if let TruthMatch::Band { tolerance } = g.premise_truth_match {
            if !(tolerance >= 0.0 && tolerance.is_finite()) {
                return Err(invalid("grading.premise_truth_match.tolerance", "must be finite and >= 0"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
