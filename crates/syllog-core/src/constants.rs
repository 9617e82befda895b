//! Wire symbols and fixed constants shared across the workspace.

/// Copula symbol for inheritance (directed).
pub const INHERITANCE_SYMBOL: &str = "-->";
/// Copula symbol for similarity (symmetric).
pub const SIMILARITY_SYMBOL: &str = "<->";

/// Decimal places kept for `f` and `c` in wire records.
pub const TRUTH_DECIMALS: i32 = 3;

/// Upper bound on conclusions licensed by one premise pair.
pub const MAX_CONCLUSIONS: usize = 3;

/// Evidential horizon `k` used by the diagnostic evidence-weight accessors.
pub const EVIDENTIAL_HORIZON: f64 = 1.0;

// Answer document keys
pub const PREMISE_1_KEY: &str = "premise_1";
pub const PREMISE_2_KEY: &str = "premise_2";
pub const RESULTS_KEY: &str = "results";
pub const STEP_1_KEY: &str = "step 1";
pub const STEP_2_KEY: &str = "step 2";
