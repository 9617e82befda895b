//! Property tests for similarity, assignment and grading bounds.

use proptest::prelude::*;

use syllog_core::config::SimilarityConfig;
use syllog_core::{AnswerDocument, TruthValue};
use syllog_grading::{maximize, similarity, Grader};
use syllog_inference::{derive, MatchCase, SyllogismTerms};

fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for perm in permutations(n - 1) {
        for slot in 0..=perm.len() {
            let mut next = perm.clone();
            next.insert(slot, n - 1);
            out.push(next);
        }
    }
    out
}

fn square(n: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(0.0f64..100.0, n), n)
}

fn thousandths() -> impl Strategy<Value = f64> {
    (50u32..=950).prop_map(|k| k as f64 / 1000.0)
}

proptest! {
    #[test]
    fn similarity_is_one_on_identity(a in 0.0f64..=1.0) {
        prop_assert_eq!(similarity(a, a, &SimilarityConfig::default()), 1.0);
    }

    #[test]
    fn similarity_is_monotone_and_floored(a in 0.0f64..=1.0, d1 in 0.0f64..1.0, d2 in 0.0f64..1.0) {
        let config = SimilarityConfig::default();
        let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        let s_near = similarity(a, a + near, &config);
        let s_far = similarity(a, a + far, &config);
        prop_assert!(s_near >= s_far - 1e-12);
        prop_assert!(s_far >= config.floor);
        prop_assert!(s_near <= 1.0);
    }

    #[test]
    fn assignment_matches_brute_force(n in 1usize..=4, seed in square(4)) {
        let scores: Vec<Vec<f64>> = seed.iter().take(n).map(|row| row[..n].to_vec()).collect();
        let best = permutations(n)
            .into_iter()
            .map(|perm| perm.iter().enumerate().map(|(r, &c)| scores[r][c]).sum::<f64>())
            .fold(f64::MIN, f64::max);
        let naive: f64 = (0..n).map(|i| scores[i][i]).sum();
        let found = maximize(&scores);
        prop_assert!((found.total - best).abs() < 1e-6);
        prop_assert!(found.total >= naive - 1e-6);
        prop_assert_eq!(found.pairs.len(), n);
    }

    #[test]
    fn grade_stays_in_unit_interval(candidate in ".{0,200}") {
        let grader = Grader::default();
        let reference = r#"{"premise_1": {"s": "M", "o": "P", "cp": "-->", "f": 0.8, "c": 0.9, "eb": [1]},
            "premise_2": {"s": "S", "o": "M", "cp": "-->", "f": 0.6, "c": 0.9, "eb": [2]},
            "results": [{"s": "S", "o": "P", "cp": "-->", "f": 0.48, "c": 0.389, "eb": [1, 2], "r": "ded"}]}"#;
        let g = grader.grade(&candidate, reference);
        prop_assert!(g.score >= grader.config().grading.floor);
        prop_assert!(g.score <= 1.0);
        prop_assert!(!g.is_fatal());
    }

    #[test]
    fn rendered_documents_grade_reflexively(case_idx in 0usize..9, f1 in thousandths(), f2 in thousandths()) {
        let case = MatchCase::ALL[case_idx];
        let terms = SyllogismTerms::new("S", "M", "P");
        let (first, second) = case
            .instantiate(
                &terms,
                TruthValue::new(f1, 0.9).unwrap(),
                TruthValue::new(f2, 0.9).unwrap(),
                [1].into(),
                [2].into(),
            )
            .unwrap();
        let results = derive(&first, &second).unwrap();
        let text = AnswerDocument::new(&first, &second, &results).render().unwrap();

        let g = Grader::default().grade(&text, &text);
        prop_assert!(g.score > 0.9999, "score {}", g.score);
        prop_assert!(g.diagnostics.is_empty(), "{:?}", g.diagnostics);
    }
}
