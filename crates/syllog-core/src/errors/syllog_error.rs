use super::{
    ConfigError, GradeError, InferenceError, ParseError, StatementError, SyllogErrorCode,
};

/// Top-level error type for the syllog workspace.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum SyllogError {
    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("statement error: {0}")]
    Statement(#[from] StatementError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("grade error: {0}")]
    Grade(#[from] GradeError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SyllogErrorCode for SyllogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Inference(e) => e.error_code(),
            Self::Statement(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Grade(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => "SERIALIZATION",
        }
    }
}

/// Convenience type alias.
pub type SyllogResult<T> = Result<T, SyllogError>;
