//! Two-component truth value: frequency and confidence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::EVIDENTIAL_HORIZON;
use crate::errors::StatementError;

/// Truth value `(f, c)` of a statement.
///
/// - `frequency` ∈ [0, 1]: degree of truth.
/// - `confidence` ∈ (0, 1): evidence-weighted certainty.
///
/// Immutable: every transformation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TruthComponents")]
pub struct TruthValue {
    #[serde(rename = "f")]
    frequency: f64,
    #[serde(rename = "c")]
    confidence: f64,
}

impl TruthValue {
    /// Validated constructor for ground (premise) truth values.
    pub fn new(frequency: f64, confidence: f64) -> Result<Self, StatementError> {
        let valid = frequency.is_finite()
            && confidence.is_finite()
            && (0.0..=1.0).contains(&frequency)
            && confidence > 0.0
            && confidence < 1.0;
        if !valid {
            return Err(StatementError::InvalidTruth {
                frequency,
                confidence,
            });
        }
        Ok(Self {
            frequency,
            confidence,
        })
    }

    /// Unvalidated constructor for truth-function outputs.
    ///
    /// Derived confidences can land on the boundary (e.g. deduction from a
    /// zero-frequency premise yields `c = 0`), so no range check is applied.
    pub fn from_raw(frequency: f64, confidence: f64) -> Self {
        Self {
            frequency,
            confidence,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Total evidence amount `w = k·c / (1 − c)`.
    ///
    /// Diagnostic only. The truth functions never read it.
    pub fn evidence_weight(&self) -> f64 {
        EVIDENTIAL_HORIZON * self.confidence / (1.0 - self.confidence)
    }

    /// Positive evidence `w⁺ = w·f`. Diagnostic only.
    pub fn positive_evidence(&self) -> f64 {
        self.evidence_weight() * self.frequency
    }

    /// Negative evidence `w⁻ = w·(1 − f)`. Diagnostic only.
    pub fn negative_evidence(&self) -> f64 {
        self.evidence_weight() * (1.0 - self.frequency)
    }

    /// A copy with both components rounded to `decimals` places.
    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            frequency: round_to(self.frequency, decimals),
            confidence: round_to(self.confidence, decimals),
        }
    }
}

/// Unchecked `{f, c}` as read off the wire.
#[derive(Deserialize)]
struct TruthComponents {
    f: f64,
    c: f64,
}

impl TryFrom<TruthComponents> for TruthValue {
    type Error = StatementError;

    fn try_from(raw: TruthComponents) -> Result<Self, Self::Error> {
        Self::new(raw.f, raw.c)
    }
}

impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{};{}%", round_to(self.frequency, 3), round_to(self.confidence, 3))
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_components() {
        assert!(TruthValue::new(1.2, 0.9).is_err());
        assert!(TruthValue::new(0.5, 1.0).is_err());
        assert!(TruthValue::new(0.5, 0.0).is_err());
        assert!(TruthValue::new(f64::NAN, 0.5).is_err());
        assert!(TruthValue::new(0.0, 0.9).is_ok());
        assert!(TruthValue::new(1.0, 0.9).is_ok());
    }

    #[test]
    fn evidence_weight_follows_horizon() {
        let tv = TruthValue::new(0.8, 0.9).unwrap();
        assert!((tv.evidence_weight() - 9.0).abs() < 1e-9);
        assert!((tv.positive_evidence() - 7.2).abs() < 1e-9);
        assert!((tv.negative_evidence() - 1.8).abs() < 1e-9);
    }

    #[test]
    fn rounding_returns_new_value() {
        let tv = TruthValue::from_raw(0.388_8, 0.746_49);
        let r = tv.rounded(3);
        assert_eq!(r.frequency(), 0.389);
        assert_eq!(r.confidence(), 0.746);
        assert_eq!(tv.frequency(), 0.388_8);
    }

    #[test]
    fn deserialization_validates_components() {
        let tv: TruthValue = serde_json::from_str(r#"{"f": 0.8, "c": 0.9}"#).unwrap();
        assert_eq!(tv, TruthValue::new(0.8, 0.9).unwrap());
        assert!(serde_json::from_str::<TruthValue>(r#"{"f": 1.5, "c": 0.9}"#).is_err());
        assert!(serde_json::from_str::<TruthValue>(r#"{"f": 0.5, "c": 1.0}"#).is_err());
    }

    proptest::proptest! {
        #[test]
        fn valid_components_round_trip(f in 0.0f64..=1.0, c in 0.001f64..0.999) {
            let tv = TruthValue::new(f, c).unwrap();
            proptest::prop_assert_eq!(tv.frequency(), f);
            proptest::prop_assert!(tv.evidence_weight() > 0.0);
            let r = tv.rounded(3);
            proptest::prop_assert_eq!(r.rounded(3), r);
        }
    }
}
