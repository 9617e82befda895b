//! Reasoner and truth-algebra errors.

use super::error_code::SyllogErrorCode;
use crate::models::RuleName;

/// Errors raised while deriving conclusions from a premise pair.
///
/// A premise pair that matches no configuration is not an error; the reasoner
/// returns an empty derivation list for it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("degenerate truth for {rule}: evidence denominator {denominator} is zero or non-finite")]
    DegenerateTruth { rule: RuleName, denominator: f64 },

    #[error("premise {premise} has an empty evidential base")]
    EmptyEvidence { premise: u8 },
}

impl SyllogErrorCode for InferenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DegenerateTruth { .. } => "INFERENCE_DEGENERATE_TRUTH",
            Self::EmptyEvidence { .. } => "INFERENCE_EMPTY_EVIDENCE",
        }
    }
}
