use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque term identifier. Equality is the only operation the logic uses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Self(s)
    }
}
