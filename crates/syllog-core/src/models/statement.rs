//! Statement ("task"): two terms, a copula, a truth value, and provenance.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use super::{Copula, RuleName, StatementRecord, Term, TruthValue};
use crate::constants::{MAX_CONCLUSIONS, TRUTH_DECIMALS};
use crate::errors::StatementError;

/// Set of opaque provenance ids a statement's truth rests on.
pub type EvidentialBase = BTreeSet<u64>;

/// Conclusions derived from one premise pair, in table order.
pub type Derivations = SmallVec<[Statement; MAX_CONCLUSIONS]>;

/// An immutable statement.
///
/// `rule` is `None` for ground premises and names the producing inference
/// rule for derived statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    subject: Term,
    object: Term,
    copula: Copula,
    truth: TruthValue,
    evidence: EvidentialBase,
    rule: Option<RuleName>,
}

impl Statement {
    /// Build a ground premise. Rejects reflexive statements.
    pub fn premise(
        subject: impl Into<Term>,
        object: impl Into<Term>,
        copula: Copula,
        truth: TruthValue,
        evidence: impl IntoIterator<Item = u64>,
    ) -> Result<Self, StatementError> {
        let subject = subject.into();
        let object = object.into();
        if subject == object {
            return Err(StatementError::ReflexiveStatement {
                term: subject.to_string(),
            });
        }
        Ok(Self {
            subject,
            object,
            copula,
            truth,
            evidence: evidence.into_iter().collect(),
            rule: None,
        })
    }

    /// Build a derived statement. The reasoner guarantees distinct terms and
    /// an evidence set equal to the union of the parents'.
    pub fn derived(
        subject: Term,
        object: Term,
        copula: Copula,
        truth: TruthValue,
        evidence: EvidentialBase,
        rule: RuleName,
    ) -> Self {
        Self {
            subject,
            object,
            copula,
            truth,
            evidence,
            rule: Some(rule),
        }
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn object(&self) -> &Term {
        &self.object
    }

    pub fn copula(&self) -> Copula {
        self.copula
    }

    pub fn truth(&self) -> TruthValue {
        self.truth
    }

    pub fn evidence(&self) -> &EvidentialBase {
        &self.evidence
    }

    pub fn rule(&self) -> Option<RuleName> {
        self.rule
    }

    pub fn is_derived(&self) -> bool {
        self.rule.is_some()
    }

    /// A copy with the truth value rounded for display or serialization.
    pub fn rounded(&self) -> Self {
        Self {
            truth: self.truth.rounded(TRUTH_DECIMALS),
            ..self.clone()
        }
    }

    /// Wire form: truth rounded to 3 decimals, evidence sorted.
    pub fn to_record(&self) -> StatementRecord {
        let truth = self.truth.rounded(TRUTH_DECIMALS);
        StatementRecord {
            subject: self.subject.to_string(),
            object: self.object.to_string(),
            copula: self.copula.symbol().to_string(),
            frequency: truth.frequency(),
            confidence: truth.confidence(),
            evidence: self.evidence.clone(),
            rule: self.rule.map(|r| r.as_str().to_string()),
        }
    }
}

impl TryFrom<&StatementRecord> for Statement {
    type Error = StatementError;

    /// Lift an untrusted wire record into a statement.
    fn try_from(record: &StatementRecord) -> Result<Self, Self::Error> {
        let copula: Copula = record.copula.parse()?;
        let truth = TruthValue::new(record.frequency, record.confidence)?;
        let mut statement = Statement::premise(
            record.subject.as_str(),
            record.object.as_str(),
            copula,
            truth,
            record.evidence.iter().copied(),
        )?;
        if let Some(rule) = &record.rule {
            statement.rule = Some(rule.parse()?);
        }
        Ok(statement)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.evidence.iter().map(u64::to_string).collect();
        write!(
            f,
            "<{}{}{}>. {} {{{}}}",
            self.subject,
            self.copula,
            self.object,
            self.truth,
            ids.join(", ")
        )?;
        if let Some(rule) = self.rule {
            write!(f, " ({rule})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(f: f64, c: f64) -> TruthValue {
        TruthValue::new(f, c).unwrap()
    }

    #[test]
    fn premise_rejects_reflexive() {
        let err = Statement::premise("A", "A", Copula::Inheritance, tv(0.5, 0.9), [1]);
        assert!(matches!(err, Err(StatementError::ReflexiveStatement { .. })));
    }

    #[test]
    fn display_is_compact_narsese() {
        let s = Statement::premise("S", "P", Copula::Inheritance, tv(0.48, 0.3888), [2, 1]).unwrap();
        assert_eq!(s.to_string(), "<S-->P>. %0.48;0.389% {1, 2}");
    }

    #[test]
    fn record_round_trip_preserves_fields() {
        let s = Statement::derived(
            Term::from("S"),
            Term::from("P"),
            Copula::Similarity,
            TruthValue::from_raw(0.123_456, 0.654_321),
            [3, 1].into_iter().collect(),
            RuleName::ComparisonPrime,
        );
        let record = s.to_record();
        assert_eq!(record.copula, "<->");
        assert_eq!(record.frequency, 0.123);
        assert_eq!(record.confidence, 0.654);
        assert_eq!(record.rule.as_deref(), Some("com_p"));

        let back = Statement::try_from(&record).unwrap();
        assert_eq!(back.rule(), Some(RuleName::ComparisonPrime));
        assert_eq!(back.evidence(), s.evidence());
    }

    #[test]
    fn try_from_rejects_unknown_copula() {
        let mut record = Statement::premise("S", "P", Copula::Inheritance, tv(0.5, 0.9), [1])
            .unwrap()
            .to_record();
        record.copula = "==>".to_string();
        assert!(matches!(
            Statement::try_from(&record),
            Err(StatementError::UnknownCopula { .. })
        ));
    }
}
