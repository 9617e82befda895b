//! Field-level scoring of premises and derivations.

pub mod derivation;
pub mod premise;

use std::collections::BTreeSet;
use std::ops::AddAssign;

use syllog_core::StatementRecord;

pub use derivation::DerivationScorer;
pub use premise::PremiseScorer;

/// Human-readable findings, one per mismatched or missing field.
pub type Diagnostics = BTreeSet<String>;

/// Achieved versus attainable credit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tally {
    pub achieved: f64,
    pub possible: f64,
}

impl Tally {
    pub fn new(achieved: f64, possible: f64) -> Self {
        Self { achieved, possible }
    }

    /// `achieved / (possible + epsilon)`.
    pub fn ratio(&self, epsilon: f64) -> f64 {
        self.achieved / (self.possible + epsilon)
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.achieved += rhs.achieved;
        self.possible += rhs.possible;
    }
}

/// A discrete field whose values differ.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldMismatch {
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

/// Compare `s`, `o`, `cp`, `eb` and, when `with_rule`, `r`.
/// Returns the number of compared fields and the mismatches among them.
pub(crate) fn discrete_mismatches(
    reference: &StatementRecord,
    candidate: &StatementRecord,
    with_rule: bool,
) -> (usize, Vec<FieldMismatch>) {
    let mut mismatches = Vec::new();
    let mut check = |field: &'static str, expected: String, actual: String| {
        if expected != actual {
            mismatches.push(FieldMismatch {
                field,
                expected,
                actual,
            });
        }
    };

    check("s", reference.subject.clone(), candidate.subject.clone());
    check("o", reference.object.clone(), candidate.object.clone());
    check("cp", reference.copula.clone(), candidate.copula.clone());
    if reference.evidence != candidate.evidence {
        check("eb", format_evidence(reference), format_evidence(candidate));
    }
    if with_rule {
        check(
            "r",
            reference.rule.clone().unwrap_or_default(),
            candidate.rule.clone().unwrap_or_default(),
        );
    }

    let compared = if with_rule { 5 } else { 4 };
    (compared, mismatches)
}

/// Compact label for a record, e.g. `<S-->P> (ded)`.
pub(crate) fn describe(record: &StatementRecord) -> String {
    let mut label = format!("<{}{}{}>", record.subject, record.copula, record.object);
    if let Some(rule) = record.rule.as_deref().filter(|r| !r.is_empty()) {
        label.push_str(&format!(" ({rule})"));
    }
    label
}

fn format_evidence(record: &StatementRecord) -> String {
    let ids: Vec<String> = record.evidence.iter().map(u64::to_string).collect();
    format!("[{}]", ids.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(s: &str, o: &str, eb: &[u64], r: Option<&str>) -> StatementRecord {
        StatementRecord {
            subject: s.into(),
            object: o.into(),
            copula: "-->".into(),
            frequency: 0.5,
            confidence: 0.9,
            evidence: eb.iter().copied().collect(),
            rule: r.map(str::to_string),
        }
    }

    #[test]
    fn evidence_compares_as_set() {
        let a = record("A", "B", &[2, 1], None);
        let b = record("A", "B", &[1, 2, 2], None);
        let (compared, mismatches) = discrete_mismatches(&a, &b, false);
        assert_eq!(compared, 4);
        assert!(mismatches.is_empty());
    }

    #[test]
    fn rule_only_counts_when_requested() {
        let a = record("A", "B", &[1], Some("ded"));
        let b = record("A", "B", &[1], Some("ind"));
        assert!(discrete_mismatches(&a, &b, false).1.is_empty());
        let (compared, mismatches) = discrete_mismatches(&a, &b, true);
        assert_eq!(compared, 5);
        assert_eq!(mismatches[0].field, "r");
    }

    #[test]
    fn describe_includes_rule() {
        assert_eq!(describe(&record("S", "P", &[1], Some("ded"))), "<S-->P> (ded)");
        assert_eq!(describe(&record("S", "P", &[1], None)), "<S-->P>");
    }
}
