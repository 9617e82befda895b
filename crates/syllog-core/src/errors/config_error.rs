//! Configuration errors.

use super::error_code::SyllogErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl SyllogErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Toml(_) => "CONFIG_TOML",
            Self::Invalid { .. } => "CONFIG_INVALID",
        }
    }
}
