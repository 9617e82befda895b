//! Errors converting untrusted wire values into domain types.

use super::error_code::SyllogErrorCode;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatementError {
    #[error("invalid truth value: frequency {frequency} must be in [0, 1], confidence {confidence} in (0, 1)")]
    InvalidTruth { frequency: f64, confidence: f64 },

    #[error("unknown copula: {copula:?}")]
    UnknownCopula { copula: String },

    #[error("unknown inference rule: {rule:?}")]
    UnknownRule { rule: String },

    #[error("statement relates {term} to itself")]
    ReflexiveStatement { term: String },
}

impl SyllogErrorCode for StatementError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTruth { .. } => "STATEMENT_INVALID_TRUTH",
            Self::UnknownCopula { .. } => "STATEMENT_UNKNOWN_COPULA",
            Self::UnknownRule { .. } => "STATEMENT_UNKNOWN_RULE",
            Self::ReflexiveStatement { .. } => "STATEMENT_REFLEXIVE",
        }
    }
}
