//! # syllog-inference
//!
//! Two-premise syllogistic inference: the truth algebra, the structural
//! matcher over the nine premise configurations, and the reasoner that
//! combines them. Also builds premise pairs for a chosen configuration.

pub mod matcher;
pub mod reasoner;
pub mod truth;

pub use matcher::{match_premises, Conclusion, Match, MatchCase, Orientation, SyllogismTerms};
pub use reasoner::{derive, derive_with_case};
pub use truth::combine;
