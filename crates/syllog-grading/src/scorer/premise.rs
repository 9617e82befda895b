//! Premise scoring against the reference premises.

use syllog_core::config::{GradingConfig, SimilarityConfig, TruthMatch};
use syllog_core::{StatementRecord, SyllogConfig};

use super::{discrete_mismatches, Diagnostics, Tally};
use crate::similarity::similarity;

/// Scores one candidate premise: `discrete_weight` per exact `s/o/cp/eb`
/// field plus `premise_truth_weight` per `f/c` under the configured
/// truth-matching mode.
#[derive(Debug, Clone, Copy)]
pub struct PremiseScorer<'a> {
    grading: &'a GradingConfig,
    similarity: &'a SimilarityConfig,
}

impl<'a> PremiseScorer<'a> {
    pub fn new(config: &'a SyllogConfig) -> Self {
        Self {
            grading: &config.grading,
            similarity: &config.similarity,
        }
    }

    /// Maximum credit for one premise.
    pub fn possible(&self) -> f64 {
        4.0 * self.grading.discrete_weight + 2.0 * self.grading.premise_truth_weight
    }

    /// A missing candidate premise earns nothing but still counts in full.
    pub fn score(
        &self,
        label: &str,
        reference: &StatementRecord,
        candidate: Option<&StatementRecord>,
        diagnostics: &mut Diagnostics,
    ) -> Tally {
        let possible = self.possible();
        let Some(candidate) = candidate else {
            diagnostics.insert(format!("{label} missing"));
            return Tally::new(0.0, possible);
        };

        let (compared, mismatches) = discrete_mismatches(reference, candidate, false);
        for m in &mismatches {
            diagnostics.insert(format!(
                "{label}.{} mismatch: expected {:?}, got {:?}",
                m.field, m.expected, m.actual
            ));
        }
        let mut achieved = (compared - mismatches.len()) as f64 * self.grading.discrete_weight;

        for (field, expected, actual) in [
            ("f", reference.frequency, candidate.frequency),
            ("c", reference.confidence, candidate.confidence),
        ] {
            let credit = self.truth_credit(expected, actual);
            if credit < 1.0 {
                diagnostics.insert(format!(
                    "{label}.{field} off: expected {expected:.3}, got {actual:.3}"
                ));
            }
            achieved += credit * self.grading.premise_truth_weight;
        }

        Tally::new(achieved, possible)
    }

    /// Fraction of the truth weight earned, in `[0, 1]`.
    fn truth_credit(&self, expected: f64, actual: f64) -> f64 {
        match self.grading.premise_truth_match {
            TruthMatch::Smooth => similarity(expected, actual, self.similarity),
            TruthMatch::Band { tolerance } => {
                if (expected - actual).abs() <= tolerance {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premise(f: f64) -> StatementRecord {
        StatementRecord {
            subject: "M".into(),
            object: "P".into(),
            copula: "-->".into(),
            frequency: f,
            confidence: 0.9,
            evidence: [1].into(),
            rule: None,
        }
    }

    #[test]
    fn exact_premise_earns_full_credit() {
        let config = SyllogConfig::default();
        let mut diagnostics = Diagnostics::new();
        let tally = PremiseScorer::new(&config).score("premise_1", &premise(0.8), Some(&premise(0.8)), &mut diagnostics);
        assert_eq!(tally, Tally::new(30.0, 30.0));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn missing_premise_counts_in_full() {
        let config = SyllogConfig::default();
        let mut diagnostics = Diagnostics::new();
        let tally = PremiseScorer::new(&config).score("premise_2", &premise(0.8), None, &mut diagnostics);
        assert_eq!(tally, Tally::new(0.0, 30.0));
        assert!(diagnostics.contains("premise_2 missing"));
    }

    #[test]
    fn band_mode_is_all_or_nothing() {
        let mut config = SyllogConfig::default();
        config.grading.premise_truth_match = TruthMatch::Band { tolerance: 0.2 };
        let scorer = PremiseScorer::new(&config);
        let mut diagnostics = Diagnostics::new();

        let near = scorer.score("premise_1", &premise(0.8), Some(&premise(0.65)), &mut diagnostics);
        assert_eq!(near.achieved, 30.0);
        let far = scorer.score("premise_1", &premise(0.8), Some(&premise(0.5)), &mut diagnostics);
        assert_eq!(far.achieved, 25.0);
        assert!(diagnostics.iter().any(|d| d.starts_with("premise_1.f off")));
    }
}
