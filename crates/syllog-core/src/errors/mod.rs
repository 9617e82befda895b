mod config_error;
mod error_code;
mod grade_error;
mod inference_error;
mod parse_error;
mod statement_error;
mod syllog_error;

pub use config_error::ConfigError;
pub use error_code::SyllogErrorCode;
pub use grade_error::GradeError;
pub use inference_error::InferenceError;
pub use parse_error::ParseError;
pub use statement_error::StatementError;
pub use syllog_error::{SyllogError, SyllogResult};
