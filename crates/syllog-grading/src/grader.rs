//! Reward grading of a candidate answer against a reference answer.
//!
//! Grading never fails: unparseable references, internal errors and panics
//! all collapse to the floor score with a `fatal parse/grade failure`
//! diagnostic.

use std::any::Any;
use std::collections::BTreeSet;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use syllog_core::config::DerivationSource;
use syllog_core::errors::GradeError;
use syllog_core::traits::TextRepair;
use syllog_core::{Statement, StatementRecord, SyllogConfig, SyllogErrorCode, SyllogResult};
use syllog_inference::derive;
use tracing::{debug, error};

use crate::parser::{LenientParser, ParseStage, ParsedAnswer};
use crate::scorer::{DerivationScorer, Diagnostics, PremiseScorer, Tally};

/// Prefix of the diagnostic attached to every fatal grade.
pub const FATAL_DIAGNOSTIC: &str = "fatal parse/grade failure";

/// Reward and the findings behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// In `[floor, 1]`.
    pub score: f64,
    pub diagnostics: BTreeSet<String>,
    /// Parser stage the candidate needed.
    pub candidate_stage: ParseStage,
}

impl Grade {
    pub fn fatal(floor: f64, reason: impl fmt::Display) -> Self {
        Self {
            score: floor,
            diagnostics: BTreeSet::from([format!("{FATAL_DIAGNOSTIC}: {reason}")]),
            candidate_stage: ParseStage::Unparseable,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.diagnostics.iter().any(|d| d.starts_with(FATAL_DIAGNOSTIC))
    }
}

/// Stateless grader. `Send + Sync`; share one across threads.
#[derive(Debug)]
pub struct Grader {
    config: SyllogConfig,
    parser: LenientParser,
}

impl Grader {
    pub fn new(config: SyllogConfig) -> Self {
        let parser = LenientParser::new(config.parser.clone());
        Self { config, parser }
    }

    /// Grade with an alternative repair stage.
    pub fn with_repair(config: SyllogConfig, repairer: Box<dyn TextRepair>) -> Self {
        let parser = LenientParser::with_repair(config.parser.clone(), repairer);
        Self { config, parser }
    }

    pub fn config(&self) -> &SyllogConfig {
        &self.config
    }

    pub fn parser(&self) -> &LenientParser {
        &self.parser
    }

    /// Grade one single-step answer.
    pub fn grade(&self, candidate: &str, reference: &str) -> Grade {
        self.contained("grade", || self.try_grade(candidate, reference))
    }

    /// Grade independent pairs in parallel. Output order follows input order.
    pub fn grade_batch<S>(&self, pairs: &[(S, S)]) -> Vec<Grade>
    where
        S: AsRef<str> + Sync,
    {
        pairs
            .par_iter()
            .map(|(candidate, reference)| self.grade(candidate.as_ref(), reference.as_ref()))
            .collect()
    }

    fn try_grade(&self, candidate: &str, reference: &str) -> Result<Grade, GradeError> {
        let reference = self
            .parser
            .parse(reference)
            .into_answer()
            .ok_or(GradeError::ReferenceUnparseable)?;
        let (ref_premise_1, ref_premise_2) = reference_premises(&reference)?;

        let outcome = self.parser.parse(candidate);
        let stage = outcome.stage();
        let candidate = outcome.into_answer().unwrap_or_default();

        let mut diagnostics = Diagnostics::new();
        match stage {
            ParseStage::Unparseable => {
                diagnostics.insert("candidate unparseable".to_string());
            }
            ParseStage::Salvaged => {
                diagnostics.insert("candidate recovered by regex salvage".to_string());
            }
            ParseStage::Strict | ParseStage::Repaired => {}
        }

        let premises = PremiseScorer::new(&self.config);
        let mut tally = Tally::default();
        tally += premises.score("premise_1", ref_premise_1, candidate.premise_1.as_ref(), &mut diagnostics);
        tally += premises.score("premise_2", ref_premise_2, candidate.premise_2.as_ref(), &mut diagnostics);

        let expected = self.expected_derivations(&reference, &candidate, &mut diagnostics)?;
        tally += DerivationScorer::new(&self.config).score(&expected, &candidate.results, &mut diagnostics);

        let grade = self.finish(tally, stage, diagnostics);
        debug!(score = grade.score, stage = ?stage, findings = grade.diagnostics.len(), "graded answer");
        Ok(grade)
    }

    /// The derivation set the candidate's results are matched against.
    ///
    /// Candidate premises that cannot be reasoned from fall back to what the
    /// reference premises imply, so the derivation weight is always charged.
    fn expected_derivations(
        &self,
        reference: &ParsedAnswer,
        candidate: &ParsedAnswer,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<StatementRecord>, GradeError> {
        match self.config.grading.derivation_source {
            DerivationSource::CandidatePremises => Ok(self_consistent_set(candidate, diagnostics)
                .unwrap_or_else(|| reference_derivations(reference))),
            DerivationSource::ReferencePremises => {
                let (first, second) = reference_premises(reference)?;
                derive_records(first, second).map_err(|err| GradeError::ReferenceIncomplete {
                    section: format!("derivable premises ({err})"),
                })
            }
            DerivationSource::ReferenceResults => Ok(reference.results.clone()),
        }
    }

    /// Ratio, salvage penalty, then floor.
    pub(crate) fn finish(&self, tally: Tally, stage: ParseStage, diagnostics: Diagnostics) -> Grade {
        let grading = &self.config.grading;
        let mut score = tally.ratio(grading.epsilon);
        if stage == ParseStage::Salvaged {
            score *= grading.salvage_penalty;
        }
        Grade {
            score: score.clamp(grading.floor, 1.0),
            diagnostics,
            candidate_stage: stage,
        }
    }

    /// Run `op`, folding errors and panics into a fatal grade.
    pub(crate) fn contained(&self, op: &'static str, f: impl FnOnce() -> Result<Grade, GradeError>) -> Grade {
        let floor = self.config.grading.floor;
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(Ok(grade)) => grade,
            Ok(Err(err)) => {
                error!(op, code = err.error_code(), error = %err, "grading failed");
                Grade::fatal(floor, err)
            }
            Err(payload) => {
                let err = GradeError::Internal(format!("panic: {}", panic_message(payload.as_ref())));
                error!(op, code = err.error_code(), error = %err, "grading panicked");
                Grade::fatal(floor, err)
            }
        }
    }
}

impl Default for Grader {
    fn default() -> Self {
        Self::new(SyllogConfig::default())
    }
}

/// Derivations implied by the candidate's own premises. `None`, with a
/// diagnostic, when those premises are incomplete, invalid or match no
/// configuration.
pub(crate) fn self_consistent_set(candidate: &ParsedAnswer, diagnostics: &mut Diagnostics) -> Option<Vec<StatementRecord>> {
    let (Some(first), Some(second)) = (&candidate.premise_1, &candidate.premise_2) else {
        diagnostics.insert("derivations not checked: candidate premises incomplete".to_string());
        return None;
    };
    match derive_records(first, second) {
        Ok(records) if records.is_empty() => {
            diagnostics.insert("derivations not checked: candidate premises match no configuration".to_string());
            None
        }
        Ok(records) => Some(records),
        Err(err) => {
            diagnostics.insert(format!("derivations not checked: {err}"));
            None
        }
    }
}

/// What the reference premises imply, or the reference's own results when
/// its premises cannot be reasoned from.
fn reference_derivations(reference: &ParsedAnswer) -> Vec<StatementRecord> {
    let derived = reference_premises(reference)
        .ok()
        .and_then(|(first, second)| derive_records(first, second).ok())
        .filter(|records| !records.is_empty());
    derived.unwrap_or_else(|| reference.results.clone())
}

/// Lift two wire premises and run the reasoner over them.
pub(crate) fn derive_records(first: &StatementRecord, second: &StatementRecord) -> SyllogResult<Vec<StatementRecord>> {
    let first = Statement::try_from(first)?;
    let second = Statement::try_from(second)?;
    Ok(derive(&first, &second)?.iter().map(Statement::to_record).collect())
}

fn reference_premises(reference: &ParsedAnswer) -> Result<(&StatementRecord, &StatementRecord), GradeError> {
    let first = reference.premise_1.as_ref().ok_or_else(|| GradeError::ReferenceIncomplete {
        section: "premise_1".to_string(),
    })?;
    let second = reference.premise_2.as_ref().ok_or_else(|| GradeError::ReferenceIncomplete {
        section: "premise_2".to_string(),
    })?;
    Ok((first, second))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contained_turns_panic_into_fatal_grade() {
        let grader = Grader::default();
        let grade = grader.contained("test", || panic!("boom"));
        assert_eq!(grade.score, 0.1);
        assert!(grade.is_fatal());
        assert!(grade.diagnostics.iter().any(|d| d.contains("boom")));
    }

    #[test]
    fn contained_turns_error_into_fatal_grade() {
        let grader = Grader::default();
        let grade = grader.contained("test", || Err(GradeError::ReferenceUnparseable));
        assert!(grade.is_fatal());
        assert_eq!(grade.candidate_stage, ParseStage::Unparseable);
    }

    fn record(s: &str, o: &str, eb: u64) -> StatementRecord {
        StatementRecord {
            subject: s.into(),
            object: o.into(),
            copula: "-->".into(),
            frequency: 0.8,
            confidence: 0.9,
            evidence: [eb].into(),
            rule: None,
        }
    }

    #[test]
    fn unusable_candidate_premises_fall_back_to_reference() {
        let reference = ParsedAnswer {
            premise_1: Some(record("M", "P", 1)),
            premise_2: Some(record("S", "M", 2)),
            results: Vec::new(),
        };
        let candidate = ParsedAnswer {
            premise_1: Some(record("X", "P", 1)),
            premise_2: Some(record("S", "M", 2)),
            results: Vec::new(),
        };

        let mut diagnostics = Diagnostics::new();
        assert!(self_consistent_set(&candidate, &mut diagnostics).is_none());
        assert!(diagnostics.contains("derivations not checked: candidate premises match no configuration"));

        let expected = Grader::default()
            .expected_derivations(&reference, &candidate, &mut diagnostics)
            .unwrap();
        assert_eq!(expected.len(), 2);
        assert_eq!(expected[0].rule.as_deref(), Some("ded"));
    }

    #[test]
    fn salvage_penalty_applies_before_floor() {
        let grader = Grader::default();
        let full = grader.finish(Tally::new(10.0, 10.0), ParseStage::Salvaged, Diagnostics::new());
        assert!((full.score - 0.5).abs() < 1e-5);
        let low = grader.finish(Tally::new(1.0, 10.0), ParseStage::Salvaged, Diagnostics::new());
        assert_eq!(low.score, 0.1);
    }
}
