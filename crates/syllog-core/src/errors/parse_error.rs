//! Answer-text parsing errors.

use super::error_code::SyllogErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no recoverable premise or result block in input ({length} bytes)")]
    Unparseable { length: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SyllogErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unparseable { .. } => "PARSE_UNPARSEABLE",
            Self::Json(_) => "PARSE_JSON",
        }
    }
}
