//! Two-step chained answers: `{"step 1": …, "step 2": …}`.
//!
//! The chain reward is the product of four floored factors: the
//! self-consistency of each step, the link between step 1's conclusion and
//! the derived premise it feeds into step 2, and the final answer against the
//! reference.

use syllog_core::errors::GradeError;
use syllog_core::StatementRecord;
use tracing::debug;

use crate::assignment::maximize;
use crate::grader::{self_consistent_set, Grade, Grader};
use crate::parser::{ParseOutcome, ParseStage, ParsedAnswer};
use crate::scorer::{DerivationScorer, Diagnostics, Tally};

impl Grader {
    /// Grade a two-step answer against a two-step reference.
    pub fn grade_chain(&self, candidate: &str, reference: &str) -> Grade {
        self.contained("grade_chain", || self.try_grade_chain(candidate, reference))
    }

    fn try_grade_chain(&self, candidate: &str, reference: &str) -> Result<Grade, GradeError> {
        let reference = self
            .parser()
            .parse_chain(reference)
            .step_2
            .into_answer()
            .ok_or(GradeError::ReferenceUnparseable)?;
        if reference.results.is_empty() {
            return Err(GradeError::ReferenceIncomplete {
                section: "step 2 results".to_string(),
            });
        }

        let chain = self.parser().parse_chain(candidate);
        let stage = chain.step_1.stage().max(chain.step_2.stage());
        let mut diagnostics = Diagnostics::new();

        let step_1 = self.step_factor("step 1", &chain.step_1, &mut diagnostics);
        let step_2 = self.step_factor("step 2", &chain.step_2, &mut diagnostics);
        let link = self.link_factor(chain.step_1.answer(), chain.step_2.answer(), &mut diagnostics);
        let answer = self.answer_factor(chain.step_2.answer(), &reference, &mut diagnostics);

        let score = step_1 * step_2 * link * answer;
        debug!(step_1, step_2, link, answer, score, "graded chain");
        Ok(Grade {
            score,
            diagnostics,
            candidate_stage: stage,
        })
    }

    /// Results of one step against what its own premises imply.
    fn step_factor(&self, label: &str, outcome: &ParseOutcome, diagnostics: &mut Diagnostics) -> f64 {
        let floor = self.config().grading.floor;
        let Some(answer) = outcome.answer() else {
            diagnostics.insert(format!("{label}: unparseable"));
            return floor;
        };
        if answer.results.is_empty() {
            diagnostics.insert(format!("{label}: no results"));
            return floor;
        }

        let mut local = Diagnostics::new();
        let expected = self_consistent_set(answer, &mut local).unwrap_or_default();
        let tally = DerivationScorer::new(self.config()).score(&expected, &answer.results, &mut local);
        diagnostics.extend(local.into_iter().map(|d| format!("{label}: {d}")));

        self.finish(tally, outcome.stage(), Diagnostics::new()).score
    }

    /// Step 1's first result against the derived premises of step 2.
    fn link_factor(
        &self,
        step_1: Option<&ParsedAnswer>,
        step_2: Option<&ParsedAnswer>,
        diagnostics: &mut Diagnostics,
    ) -> f64 {
        let floor = self.config().grading.floor;
        let Some(conclusion) = step_1.and_then(|a| a.results.first()) else {
            diagnostics.insert("link: step 1 has no conclusion".to_string());
            return floor;
        };
        let carried: Vec<&StatementRecord> = step_2
            .into_iter()
            .flat_map(|a| [a.premise_1.as_ref(), a.premise_2.as_ref()])
            .flatten()
            .filter(|p| p.rule.is_some())
            .collect();
        if carried.is_empty() {
            diagnostics.insert("link: no step 2 premise carries a rule".to_string());
            return floor;
        }

        let scorer = DerivationScorer::new(self.config());
        let row: Vec<f64> = carried.iter().map(|p| scorer.pair_score(conclusion, p)).collect();
        let assignment = maximize(&[row]);
        let tally = Tally::new(assignment.total, scorer.pair_weight());
        let ratio = tally.ratio(self.config().grading.epsilon);
        if ratio < 1.0 - 1e-3 {
            diagnostics.insert("link: step 2 premise does not reproduce step 1 conclusion".to_string());
        }
        ratio.max(floor)
    }

    /// Final results against the reference's final results.
    fn answer_factor(&self, step_2: Option<&ParsedAnswer>, reference: &ParsedAnswer, diagnostics: &mut Diagnostics) -> f64 {
        let floor = self.config().grading.floor;
        let results = step_2.map(|a| a.results.as_slice()).unwrap_or_default();
        if results.is_empty() {
            diagnostics.insert("final: no results".to_string());
            return floor;
        }
        let mut local = Diagnostics::new();
        let tally = DerivationScorer::new(self.config()).score(&reference.results, results, &mut local);
        diagnostics.extend(local.into_iter().map(|d| format!("final: {d}")));
        self.finish(tally, ParseStage::Strict, Diagnostics::new()).score
    }
}
