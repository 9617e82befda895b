//! Wire records: the JSON shape models are trained to emit.
//!
//! Records are untrusted. They may carry unknown copula or rule text and
//! out-of-range numbers; lifting one into a `Statement` is fallible.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Statement;

/// `{s, o, cp, f, c, eb, r?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRecord {
    #[serde(rename = "s")]
    pub subject: String,
    #[serde(rename = "o")]
    pub object: String,
    #[serde(rename = "cp")]
    pub copula: String,
    #[serde(rename = "f")]
    pub frequency: f64,
    #[serde(rename = "c")]
    pub confidence: f64,
    /// Order-insensitive; duplicates collapse.
    #[serde(rename = "eb")]
    pub evidence: BTreeSet<u64>,
    #[serde(rename = "r", default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

/// `{premise_1, premise_2, results}`: one single-step answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerDocument {
    pub premise_1: StatementRecord,
    pub premise_2: StatementRecord,
    pub results: Vec<StatementRecord>,
}

impl AnswerDocument {
    pub fn new(premise_1: &Statement, premise_2: &Statement, results: &[Statement]) -> Self {
        Self {
            premise_1: premise_1.to_record(),
            premise_2: premise_2.to_record(),
            results: results.iter().map(Statement::to_record).collect(),
        }
    }

    /// Serialize to the compact JSON form used in datasets.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// `{"step 1": …, "step 2": …}`: a two-step chained answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainDocument {
    #[serde(rename = "step 1")]
    pub step_1: AnswerDocument,
    #[serde(rename = "step 2")]
    pub step_2: AnswerDocument,
}

impl ChainDocument {
    pub fn render(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
