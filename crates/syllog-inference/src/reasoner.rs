//! Reasoner: structural match followed by the truth algebra.

use smallvec::SmallVec;
use syllog_core::errors::InferenceError;
use syllog_core::models::Derivations;
use syllog_core::{EvidentialBase, Statement};
use tracing::{debug, warn};

use crate::matcher::{match_premises, MatchCase};
use crate::truth::combine;

/// Derive every conclusion licensed by the premise pair, in table order.
///
/// An unmatched pair yields `Ok` with an empty list. Both premises must carry
/// evidence.
pub fn derive(first: &Statement, second: &Statement) -> Result<Derivations, InferenceError> {
    Ok(derive_with_case(first, second)?
        .map(|(_, derivations)| derivations)
        .unwrap_or_default())
}

/// As [`derive`], also reporting which configuration fired.
pub fn derive_with_case(
    first: &Statement,
    second: &Statement,
) -> Result<Option<(MatchCase, Derivations)>, InferenceError> {
    if first.evidence().is_empty() {
        return Err(InferenceError::EmptyEvidence { premise: 1 });
    }
    if second.evidence().is_empty() {
        return Err(InferenceError::EmptyEvidence { premise: 2 });
    }

    let Some(matched) = match_premises(first, second) else {
        debug!(first = %first, second = %second, "premise pair matches no configuration");
        return Ok(None);
    };
    debug!(case = ?matched.case, "premise pair classified");

    let evidence: EvidentialBase = first.evidence().union(second.evidence()).copied().collect();

    let mut derivations: Derivations = SmallVec::new();
    for conclusion in matched.case.conclusions() {
        let truth = combine(conclusion.rule, first.truth(), second.truth()).inspect_err(|err| {
            warn!(case = ?matched.case, rule = ?conclusion.rule, error = %err, "degenerate truth value");
        })?;
        let (subject, object) = matched.oriented(conclusion.orientation);
        derivations.push(Statement::derived(
            subject.clone(),
            object.clone(),
            conclusion.copula,
            truth,
            evidence.clone(),
            conclusion.rule,
        ));
    }

    Ok(Some((matched.case, derivations)))
}
