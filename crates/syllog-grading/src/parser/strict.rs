//! Strict stage: well-formed JSON with the expected keys.
//!
//! Validation is per section. A premise missing a key becomes `None`, a
//! result missing a key is dropped. The stage fails only when the text is not
//! a JSON object or neither premise survives.

use serde_json::{Map, Value};
use syllog_core::constants::{PREMISE_1_KEY, PREMISE_2_KEY, RESULTS_KEY};
use syllog_core::errors::ParseError;
use syllog_core::StatementRecord;

use super::ParsedAnswer;

const PREMISE_FIELDS: [&str; 6] = ["s", "o", "cp", "f", "c", "eb"];
const RESULT_FIELDS: [&str; 7] = ["s", "o", "cp", "f", "c", "eb", "r"];

/// Parse `text` as an answer document.
pub fn parse_answer(text: &str) -> Result<ParsedAnswer, ParseError> {
    let value: Value = serde_json::from_str(text.trim())?;
    answer_from_value(&value).ok_or(ParseError::Unparseable { length: text.len() })
}

/// Extract an answer from an already-parsed JSON value.
pub fn answer_from_value(value: &Value) -> Option<ParsedAnswer> {
    let object = value.as_object()?;
    let premise_1 = section(object, PREMISE_1_KEY);
    let premise_2 = section(object, PREMISE_2_KEY);
    if premise_1.is_none() && premise_2.is_none() {
        return None;
    }

    let results = object
        .get(RESULTS_KEY)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| record(item, &RESULT_FIELDS))
                .collect()
        })
        .unwrap_or_default();

    Some(ParsedAnswer {
        premise_1,
        premise_2,
        results,
    })
}

fn section(object: &Map<String, Value>, key: &str) -> Option<StatementRecord> {
    object.get(key).and_then(|v| record(v, &PREMISE_FIELDS))
}

fn record(value: &Value, required: &[&str]) -> Option<StatementRecord> {
    let fields = value.as_object()?;
    if !required.iter().all(|key| fields.contains_key(*key)) {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}
