//! Truth algebra: one truth function per inference rule.
//!
//! Every function takes the two premise truth values in premise order and
//! returns the conclusion's truth value. Primed rules are their base rule
//! with the operands swapped.
//!
//! The weighted rules (abduction, induction, exemplification, comparison)
//! divide by an evidence amount `w`. A zero or non-finite `w` is reported as
//! [`InferenceError::DegenerateTruth`]; it is never clamped.

mod operators;

pub use operators::{and_all, or_all};

use syllog_core::errors::InferenceError;
use syllog_core::{RuleName, TruthValue};

/// Apply `rule` to the premise truth values `(t1, t2)`.
pub fn combine(rule: RuleName, t1: TruthValue, t2: TruthValue) -> Result<TruthValue, InferenceError> {
    let (a, b) = if rule.is_primed() { (t2, t1) } else { (t1, t2) };
    let result = match rule {
        RuleName::Deduction | RuleName::DeductionPrime => Ok(deduction(a, b)),
        RuleName::Analogy | RuleName::AnalogyPrime => Ok(analogy(a, b)),
        RuleName::Resolution | RuleName::ResolutionPrime => Ok(resolution(a, b)),
        RuleName::Abduction | RuleName::AbductionPrime => abduction(a, b),
        RuleName::Induction | RuleName::InductionPrime => induction(a, b),
        RuleName::Exemplification | RuleName::ExemplificationPrime => exemplification(a, b),
        RuleName::Comparison | RuleName::ComparisonPrime => comparison(a, b),
    };
    let truth = result.map_err(|denominator| InferenceError::DegenerateTruth { rule, denominator })?;
    ensure_finite(rule, truth)
}

fn ensure_finite(rule: RuleName, truth: TruthValue) -> Result<TruthValue, InferenceError> {
    if truth.frequency().is_finite() && truth.confidence().is_finite() {
        Ok(truth)
    } else {
        Err(InferenceError::DegenerateTruth {
            rule,
            denominator: f64::NAN,
        })
    }
}

fn deduction(a: TruthValue, b: TruthValue) -> TruthValue {
    let (f1, c1, f2, c2) = unpack(a, b);
    TruthValue::from_raw(and_all(&[f1, f2]), and_all(&[f1, f2, c1, c2]))
}

fn analogy(a: TruthValue, b: TruthValue) -> TruthValue {
    let (f1, c1, f2, c2) = unpack(a, b);
    TruthValue::from_raw(and_all(&[f1, f2]), and_all(&[f2, c1, c2]))
}

fn resolution(a: TruthValue, b: TruthValue) -> TruthValue {
    let (f1, c1, f2, c2) = unpack(a, b);
    TruthValue::from_raw(and_all(&[f1, f2]), and_all(&[or_all(&[f1, f2]), c1, c2]))
}

fn abduction(a: TruthValue, b: TruthValue) -> Result<TruthValue, f64> {
    let (f1, c1, f2, c2) = unpack(a, b);
    weighted(and_all(&[f1, f2, c1, c2]), and_all(&[f1, c1, c2]))
}

fn induction(a: TruthValue, b: TruthValue) -> Result<TruthValue, f64> {
    let (f1, c1, f2, c2) = unpack(a, b);
    weighted(and_all(&[f1, f2, c1, c2]), and_all(&[f2, c1, c2]))
}

fn exemplification(a: TruthValue, b: TruthValue) -> Result<TruthValue, f64> {
    let (f1, c1, f2, c2) = unpack(a, b);
    let w = and_all(&[f1, f2, c1, c2]);
    weighted(w, w)
}

fn comparison(a: TruthValue, b: TruthValue) -> Result<TruthValue, f64> {
    let (f1, c1, f2, c2) = unpack(a, b);
    weighted(and_all(&[f1, f2, c1, c2]), and_all(&[or_all(&[f1, f2]), c1, c2]))
}

/// `f = w⁺ / w`, `c = w / (w + 1)`. `Err(w)` when `w` cannot be divided by.
fn weighted(positive: f64, total: f64) -> Result<TruthValue, f64> {
    if total == 0.0 || !total.is_finite() {
        return Err(total);
    }
    Ok(TruthValue::from_raw(positive / total, total / (total + 1.0)))
}

#[inline]
fn unpack(a: TruthValue, b: TruthValue) -> (f64, f64, f64, f64) {
    (a.frequency(), a.confidence(), b.frequency(), b.confidence())
}
