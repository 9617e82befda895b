//! Extended boolean operators over `[0, 1]`.

/// Conjunction: product of all operands. Empty input is `1.0`.
pub fn and_all(values: &[f64]) -> f64 {
    values.iter().product()
}

/// Disjunction: `1 − Π(1 − x)`. Empty input is `0.0`.
pub fn or_all(values: &[f64]) -> f64 {
    1.0 - values.iter().map(|x| 1.0 - x).product::<f64>()
}
