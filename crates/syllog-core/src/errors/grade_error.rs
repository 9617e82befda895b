//! Grading errors. These never leave `Grader::grade`; they are folded into the
//! floor score plus a diagnostic at the grading boundary.

use super::error_code::SyllogErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum GradeError {
    #[error("reference answer could not be parsed")]
    ReferenceUnparseable,

    #[error("reference answer is missing {section}")]
    ReferenceIncomplete { section: String },

    #[error("internal grading failure: {0}")]
    Internal(String),
}

impl SyllogErrorCode for GradeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ReferenceUnparseable => "GRADE_REFERENCE_UNPARSEABLE",
            Self::ReferenceIncomplete { .. } => "GRADE_REFERENCE_INCOMPLETE",
            Self::Internal(_) => "GRADE_INTERNAL",
        }
    }
}
