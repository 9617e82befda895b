//! Derivation scoring: optimal matching of expected against reported results.

use syllog_core::config::{GradingConfig, SimilarityConfig};
use syllog_core::{StatementRecord, SyllogConfig};

use super::{describe, discrete_mismatches, Diagnostics, Tally};
use crate::assignment::maximize;
use crate::similarity::similarity;

/// Scores a set of reported derivations against the expected set.
///
/// Rows are expected derivations, columns reported ones. Pairs are chosen by
/// maximum-weight assignment; an unmatched row earns nothing but counts in
/// full, unmatched columns are ignored.
#[derive(Debug, Clone, Copy)]
pub struct DerivationScorer<'a> {
    grading: &'a GradingConfig,
    similarity: &'a SimilarityConfig,
}

impl<'a> DerivationScorer<'a> {
    pub fn new(config: &'a SyllogConfig) -> Self {
        Self {
            grading: &config.grading,
            similarity: &config.similarity,
        }
    }

    /// Maximum credit for one expected derivation.
    pub fn pair_weight(&self) -> f64 {
        5.0 * self.grading.discrete_weight + 2.0 * self.grading.derivation_truth_weight
    }

    /// Credit earned by `candidate` against `expected`.
    pub fn pair_score(&self, expected: &StatementRecord, candidate: &StatementRecord) -> f64 {
        let (compared, mismatches) = discrete_mismatches(expected, candidate, true);
        let discrete = (compared - mismatches.len()) as f64 * self.grading.discrete_weight;
        discrete + self.truth_score(expected, candidate)
    }

    pub fn score(
        &self,
        expected: &[StatementRecord],
        reported: &[StatementRecord],
        diagnostics: &mut Diagnostics,
    ) -> Tally {
        let scores: Vec<Vec<f64>> = expected
            .iter()
            .map(|e| reported.iter().map(|r| self.pair_score(e, r)).collect())
            .collect();
        let assignment = maximize(&scores);

        let mut tally = Tally::default();
        for (row, want) in expected.iter().enumerate() {
            tally.possible += self.pair_weight();
            let Some(col) = assignment.col_for(row) else {
                diagnostics.insert(format!("missing derivation {}", describe(want)));
                continue;
            };
            let got = &reported[col];
            tally.achieved += scores[row][col];
            self.explain(want, got, diagnostics);
        }
        tally
    }

    fn truth_score(&self, expected: &StatementRecord, candidate: &StatementRecord) -> f64 {
        let f = similarity(expected.frequency, candidate.frequency, self.similarity);
        let c = similarity(expected.confidence, candidate.confidence, self.similarity);
        (f + c) * self.grading.derivation_truth_weight
    }

    fn explain(&self, want: &StatementRecord, got: &StatementRecord, diagnostics: &mut Diagnostics) {
        let label = describe(want);
        let (_, mismatches) = discrete_mismatches(want, got, true);
        for m in mismatches {
            diagnostics.insert(format!(
                "derivation {label}: {} mismatch: expected {:?}, got {:?}",
                m.field, m.expected, m.actual
            ));
        }
        for (field, expected, actual) in [
            ("f", want.frequency, got.frequency),
            ("c", want.confidence, got.confidence),
        ] {
            if similarity(expected, actual, self.similarity) < 1.0 {
                diagnostics.insert(format!(
                    "derivation {label}: {field} off: expected {expected:.3}, got {actual:.3}"
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(s: &str, o: &str, f: f64, r: &str) -> StatementRecord {
        StatementRecord {
            subject: s.into(),
            object: o.into(),
            copula: "-->".into(),
            frequency: f,
            confidence: 0.5,
            evidence: [1, 2].into(),
            rule: Some(r.into()),
        }
    }

    #[test]
    fn order_of_reported_results_does_not_matter() {
        let config = SyllogConfig::default();
        let scorer = DerivationScorer::new(&config);
        let expected = vec![result("S", "P", 0.48, "ded"), result("P", "S", 1.0, "exe_p")];
        let reported = vec![expected[1].clone(), expected[0].clone()];

        let mut diagnostics = Diagnostics::new();
        let tally = scorer.score(&expected, &reported, &mut diagnostics);
        assert_eq!(tally, Tally::new(150.0, 150.0));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn missing_rows_count_and_extra_columns_are_ignored() {
        let config = SyllogConfig::default();
        let scorer = DerivationScorer::new(&config);
        let expected = vec![result("S", "P", 0.48, "ded"), result("P", "S", 1.0, "exe_p")];

        let mut diagnostics = Diagnostics::new();
        let tally = scorer.score(&expected, &expected[..1], &mut diagnostics);
        assert_eq!(tally, Tally::new(75.0, 150.0));
        assert!(diagnostics.contains("missing derivation <P-->S> (exe_p)"));

        let mut extra = expected.clone();
        extra.push(result("X", "Y", 0.1, "ind"));
        let mut diagnostics = Diagnostics::new();
        assert_eq!(scorer.score(&expected, &extra, &mut diagnostics), Tally::new(150.0, 150.0));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn wrong_rule_costs_one_discrete_weight() {
        let config = SyllogConfig::default();
        let scorer = DerivationScorer::new(&config);
        let want = result("S", "P", 0.48, "ded");
        let got = result("S", "P", 0.48, "ind");
        assert_eq!(scorer.pair_score(&want, &got), scorer.pair_weight() - 5.0);
    }
}
