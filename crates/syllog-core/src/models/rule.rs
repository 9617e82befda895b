//! The 14 inference rule labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StatementError;

/// Named inference rule. Seven base rules plus their primed forms.
///
/// A primed rule is its base rule with the two operand truth values swapped.
/// Labels only: the truth algebra dispatches on this enum with an
/// exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleName {
    #[serde(rename = "ded")]
    Deduction,
    #[serde(rename = "ded_p")]
    DeductionPrime,
    #[serde(rename = "ana")]
    Analogy,
    #[serde(rename = "ana_p")]
    AnalogyPrime,
    #[serde(rename = "res")]
    Resolution,
    #[serde(rename = "res_p")]
    ResolutionPrime,
    #[serde(rename = "abd")]
    Abduction,
    #[serde(rename = "abd_p")]
    AbductionPrime,
    #[serde(rename = "ind")]
    Induction,
    #[serde(rename = "ind_p")]
    InductionPrime,
    #[serde(rename = "exe")]
    Exemplification,
    #[serde(rename = "exe_p")]
    ExemplificationPrime,
    #[serde(rename = "com")]
    Comparison,
    #[serde(rename = "com_p")]
    ComparisonPrime,
}

impl RuleName {
    /// All rules in wire order.
    pub const ALL: [RuleName; 14] = [
        Self::Deduction,
        Self::DeductionPrime,
        Self::Analogy,
        Self::AnalogyPrime,
        Self::Resolution,
        Self::ResolutionPrime,
        Self::Abduction,
        Self::AbductionPrime,
        Self::Induction,
        Self::InductionPrime,
        Self::Exemplification,
        Self::ExemplificationPrime,
        Self::Comparison,
        Self::ComparisonPrime,
    ];

    /// Wire symbol, e.g. `"ded_p"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deduction => "ded",
            Self::DeductionPrime => "ded_p",
            Self::Analogy => "ana",
            Self::AnalogyPrime => "ana_p",
            Self::Resolution => "res",
            Self::ResolutionPrime => "res_p",
            Self::Abduction => "abd",
            Self::AbductionPrime => "abd_p",
            Self::Induction => "ind",
            Self::InductionPrime => "ind_p",
            Self::Exemplification => "exe",
            Self::ExemplificationPrime => "exe_p",
            Self::Comparison => "com",
            Self::ComparisonPrime => "com_p",
        }
    }

    pub fn is_primed(self) -> bool {
        matches!(
            self,
            Self::DeductionPrime
                | Self::AnalogyPrime
                | Self::ResolutionPrime
                | Self::AbductionPrime
                | Self::InductionPrime
                | Self::ExemplificationPrime
                | Self::ComparisonPrime
        )
    }

    /// The unprimed rule of this pair.
    pub fn base(self) -> Self {
        match self {
            Self::DeductionPrime => Self::Deduction,
            Self::AnalogyPrime => Self::Analogy,
            Self::ResolutionPrime => Self::Resolution,
            Self::AbductionPrime => Self::Abduction,
            Self::InductionPrime => Self::Induction,
            Self::ExemplificationPrime => Self::Exemplification,
            Self::ComparisonPrime => Self::Comparison,
            base => base,
        }
    }

    /// The primed rule of this pair.
    pub fn primed(self) -> Self {
        match self.base() {
            Self::Deduction => Self::DeductionPrime,
            Self::Analogy => Self::AnalogyPrime,
            Self::Resolution => Self::ResolutionPrime,
            Self::Abduction => Self::AbductionPrime,
            Self::Induction => Self::InductionPrime,
            Self::Exemplification => Self::ExemplificationPrime,
            _ => Self::ComparisonPrime,
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| StatementError::UnknownRule {
                rule: s.to_string(),
            })
    }
}
