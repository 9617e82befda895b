//! Lenient parser configuration.

use serde::{Deserialize, Serialize};

/// Which recovery stages the lenient parser may use after a strict failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub enable_repair: bool,
    pub enable_salvage: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            enable_repair: true,
            enable_salvage: true,
        }
    }
}
