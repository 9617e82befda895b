pub mod copula;
pub mod record;
pub mod rule;
pub mod statement;
pub mod term;
pub mod truth;

pub use copula::Copula;
pub use record::{AnswerDocument, ChainDocument, StatementRecord};
pub use rule::RuleName;
pub use statement::{Derivations, EvidentialBase, Statement};
pub use term::Term;
pub use truth::TruthValue;
