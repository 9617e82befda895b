//! Reasoner throughput over all nine configurations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use syllog_core::{RuleName, Statement, TruthValue};
use syllog_inference::{combine, derive, MatchCase, SyllogismTerms};

fn make_pairs(n: usize) -> Vec<(Statement, Statement)> {
    let terms = SyllogismTerms::new("S", "M", "P");
    (0..n)
        .map(|i| {
            let case = MatchCase::ALL[i % MatchCase::ALL.len()];
            let f1 = 0.05 + (i % 19) as f64 * 0.05;
            let f2 = 0.95 - (i % 17) as f64 * 0.05;
            let t1 = TruthValue::new(f1, 0.9).unwrap();
            let t2 = TruthValue::new(f2, 0.9).unwrap();
            case.instantiate(&terms, t1, t2, [i as u64].into(), [i as u64 + 1].into())
                .unwrap()
        })
        .collect()
}

fn bench_derive(c: &mut Criterion) {
    let pairs_1k = make_pairs(1_000);

    c.bench_function("derive_1k_pairs", |b| {
        b.iter(|| {
            for (first, second) in &pairs_1k {
                black_box(derive(black_box(first), black_box(second)).unwrap());
            }
        })
    });
}

fn bench_combine(c: &mut Criterion) {
    let t1 = TruthValue::new(0.8, 0.9).unwrap();
    let t2 = TruthValue::new(0.6, 0.9).unwrap();

    c.bench_function("combine_all_rules", |b| {
        b.iter(|| {
            for rule in RuleName::ALL {
                black_box(combine(rule, black_box(t1), black_box(t2)).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_derive, bench_combine);
criterion_main!(benches);
