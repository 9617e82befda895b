//! # syllog-core
//!
//! Foundation crate for the syllog workspace.
//! Defines the statement model, wire records, errors, config, tracing setup,
//! constants, and trait seams. The inference and grading crates depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SyllogConfig;
pub use errors::{SyllogError, SyllogErrorCode, SyllogResult};
pub use models::{
    AnswerDocument, ChainDocument, Copula, Derivations, EvidentialBase, RuleName, Statement,
    StatementRecord, Term, TruthValue,
};
