//! # syllog-grading
//!
//! Reward grading for syllogistic answers produced by a language model.
//! Lenient three-stage parsing, continuous truth similarity, optimal
//! assignment of derivations, and the single-step, chained and batch graders.

pub mod assignment;
pub mod chain;
pub mod grader;
pub mod parser;
pub mod scorer;
pub mod similarity;

pub use assignment::{maximize, Assignment};
pub use grader::{Grade, Grader, FATAL_DIAGNOSTIC};
pub use parser::{parse, BuiltinRepair, ChainOutcome, LenientParser, ParseOutcome, ParseStage, ParsedAnswer};
pub use similarity::similarity;
