use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{INHERITANCE_SYMBOL, SIMILARITY_SYMBOL};
use crate::errors::StatementError;

/// The relation a statement asserts between its two terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Copula {
    /// `S --> P`: S is a specialization of P. Directed.
    #[serde(rename = "-->")]
    Inheritance,
    /// `S <-> P`: S and P are interchangeable. Symmetric.
    #[serde(rename = "<->")]
    Similarity,
}

impl Copula {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Inheritance => INHERITANCE_SYMBOL,
            Self::Similarity => SIMILARITY_SYMBOL,
        }
    }
}

impl fmt::Display for Copula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Copula {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            INHERITANCE_SYMBOL => Ok(Self::Inheritance),
            SIMILARITY_SYMBOL => Ok(Self::Similarity),
            other => Err(StatementError::UnknownCopula {
                copula: other.to_string(),
            }),
        }
    }
}
