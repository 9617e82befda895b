//! Property tests for the truth algebra and reasoner.

use proptest::prelude::*;

use syllog_core::{RuleName, TruthValue};
use syllog_inference::{combine, derive, MatchCase, SyllogismTerms};

fn truth() -> impl Strategy<Value = TruthValue> {
    (0.01f64..=1.0, 0.01f64..0.99).prop_map(|(f, c)| TruthValue::new(f, c).unwrap())
}

fn evidence() -> impl Strategy<Value = std::collections::BTreeSet<u64>> {
    prop::collection::btree_set(0u64..10_000, 1..4)
}

proptest! {
    #[test]
    fn primed_rule_equals_swapped_operands(t1 in truth(), t2 in truth(), idx in 0usize..14) {
        let rule = RuleName::ALL[idx].base();
        prop_assert_eq!(combine(rule.primed(), t1, t2).ok(), combine(rule, t2, t1).ok());
    }

    #[test]
    fn outputs_stay_in_unit_interval(t1 in truth(), t2 in truth(), idx in 0usize..14) {
        let result = combine(RuleName::ALL[idx], t1, t2).unwrap();
        prop_assert!((0.0..=1.0 + 1e-12).contains(&result.frequency()));
        prop_assert!((0.0..1.0).contains(&result.confidence()));
    }

    #[test]
    fn derivations_use_evidence_union(
        case_idx in 0usize..9,
        t1 in truth(),
        t2 in truth(),
        eb1 in evidence(),
        eb2 in evidence(),
    ) {
        let case = MatchCase::ALL[case_idx];
        let terms = SyllogismTerms::new("S", "M", "P");
        let (first, second) = case.instantiate(&terms, t1, t2, eb1.clone(), eb2.clone()).unwrap();
        let union: std::collections::BTreeSet<u64> = eb1.union(&eb2).copied().collect();
        let derived = derive(&first, &second).unwrap();
        prop_assert_eq!(derived.len(), case.conclusions().len());
        for statement in &derived {
            prop_assert_eq!(statement.evidence(), &union);
            prop_assert!(statement.subject() != statement.object());
        }
    }

    #[test]
    fn derive_is_deterministic(case_idx in 0usize..9, t1 in truth(), t2 in truth()) {
        let case = MatchCase::ALL[case_idx];
        let terms = SyllogismTerms::new("S", "M", "P");
        let (first, second) = case
            .instantiate(&terms, t1, t2, [1].into(), [2].into())
            .unwrap();
        prop_assert_eq!(derive(&first, &second).unwrap(), derive(&first, &second).unwrap());
    }
}
