//! Salvage stage: field-by-field recovery from text that no longer parses.
//!
//! Works over byte offsets. Each named block (`premise_1`, `premise_2`, the
//! elements of `results`) is located by its key and cut at the matching brace;
//! fields inside it are then extracted independently with labelled patterns.
//! Missing numbers read as `0.0`, missing evidence as an empty set, missing
//! strings as empty.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use syllog_core::StatementRecord;

use super::ParsedAnswer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Subject,
    Object,
    Copula,
    Frequency,
    Confidence,
    Evidence,
    Rule,
}

const KEY_PREFIX: &str = r#"(?:^|[^A-Za-z0-9_])["']?"#;
const KEY_SUFFIX: &str = r#"["']?\s*:\s*"#;
const TEXT_VALUE: &str = r#"(?:"([^"]*)"|'([^']*)'|([^\s,}\]"']+))"#;
const NUMBER_VALUE: &str = r#"["']?(-?\d+(?:\.\d*)?(?:[eE][-+]?\d+)?)"#;

const FIELD_PATTERNS: [(Field, &str, &str); 7] = [
    (Field::Subject, "s", TEXT_VALUE),
    (Field::Object, "o", TEXT_VALUE),
    (Field::Copula, "cp", r#"["']?(-->|<->)"#),
    (Field::Frequency, "f", NUMBER_VALUE),
    (Field::Confidence, "c", NUMBER_VALUE),
    (Field::Evidence, "eb", r"\[([^\]\[]*)"),
    (Field::Rule, "r", TEXT_VALUE),
];

struct Patterns {
    premise_1: Regex,
    premise_2: Regex,
    results: Regex,
    step_1: Regex,
    step_2: Regex,
    fields: Vec<(Field, Regex)>,
    integer: Regex,
}

impl Patterns {
    fn compile() -> Result<Self, regex::Error> {
        let fields = FIELD_PATTERNS
            .iter()
            .map(|(field, key, value)| {
                Regex::new(&format!("{KEY_PREFIX}{key}{KEY_SUFFIX}{value}")).map(|re| (*field, re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            premise_1: Regex::new(r#"["']?premise_1["']?\s*:\s*\{"#)?,
            premise_2: Regex::new(r#"["']?premise_2["']?\s*:\s*\{"#)?,
            results: Regex::new(r#"["']?results["']?\s*:\s*\["#)?,
            step_1: Regex::new(r#"["']?step[ _]?1["']?\s*:"#)?,
            step_2: Regex::new(r#"["']?step[ _]?2["']?\s*:"#)?,
            fields,
            integer: Regex::new(r"\d+")?,
        })
    }
}

static PATTERNS: OnceLock<Option<Patterns>> = OnceLock::new();

fn patterns() -> Option<&'static Patterns> {
    PATTERNS.get_or_init(|| Patterns::compile().ok()).as_ref()
}

/// Recover whatever premise and result blocks `text` still contains.
///
/// `None` when no block at all can be located.
pub fn salvage(text: &str) -> Option<ParsedAnswer> {
    let patterns = patterns()?;

    let premise_1 = locate_object(text, &patterns.premise_1).map(|b| extract_record(b, patterns, false));
    let premise_2 = locate_object(text, &patterns.premise_2).map(|b| extract_record(b, patterns, false));
    let results: Vec<StatementRecord> = patterns
        .results
        .find(text)
        .map(|m| array_objects(text, m.end() - 1))
        .unwrap_or_default()
        .into_iter()
        .map(|block| extract_record(block, patterns, true))
        .collect();

    if premise_1.is_none() && premise_2.is_none() && results.is_empty() {
        return None;
    }
    Some(ParsedAnswer {
        premise_1,
        premise_2,
        results,
    })
}

/// Split a two-step answer at its `step 1` / `step 2` keys.
pub fn split_steps(text: &str) -> (Option<&str>, Option<&str>) {
    let Some(patterns) = patterns() else {
        return (None, None);
    };
    let first = patterns.step_1.find(text).map(|m| m.start());
    let second = patterns.step_2.find(text).map(|m| m.start());
    match (first, second) {
        (Some(a), Some(b)) if a < b => (Some(&text[a..b]), Some(&text[b..])),
        (Some(a), Some(b)) => (Some(&text[a..]), Some(&text[b..a])),
        (Some(a), None) => (Some(&text[a..]), None),
        (None, Some(b)) => (None, Some(&text[b..])),
        (None, None) => (None, None),
    }
}

fn locate_object<'t>(text: &'t str, key: &Regex) -> Option<&'t str> {
    let open = key.find(text)?.end() - 1;
    Some(&text[open..balanced_end(text, open)])
}

/// Top-level `{…}` blocks of the array whose `[` sits at `open`.
fn array_objects(text: &str, open: usize) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut blocks = Vec::new();
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                let end = balanced_end(text, i);
                blocks.push(&text[i..end]);
                i = end;
            }
            b']' => break,
            _ => i += 1,
        }
    }
    blocks
}

/// Exclusive end of the brace block opening at `open`; end of text when the
/// block never closes. Quoted braces are ignored.
fn balanced_end(text: &str, open: usize) -> usize {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut i = open;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(_) if b == b'\\' => i += 1,
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'{' => depth += 1,
                b'}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return i + 1;
                    }
                }
                _ => {}
            },
        }
        i += 1;
    }
    bytes.len()
}

fn extract_record(block: &str, patterns: &Patterns, is_result: bool) -> StatementRecord {
    let mut record = StatementRecord {
        subject: String::new(),
        object: String::new(),
        copula: String::new(),
        frequency: 0.0,
        confidence: 0.0,
        evidence: BTreeSet::new(),
        rule: is_result.then(String::new),
    };

    for (field, re) in &patterns.fields {
        let Some(value) = re
            .captures(block)
            .and_then(|caps| (1..caps.len()).find_map(|g| caps.get(g)))
            .map(|m| m.as_str())
        else {
            continue;
        };
        match field {
            Field::Subject => record.subject = value.to_string(),
            Field::Object => record.object = value.to_string(),
            Field::Copula => record.copula = value.to_string(),
            Field::Frequency => record.frequency = value.parse().unwrap_or(0.0),
            Field::Confidence => record.confidence = value.parse().unwrap_or(0.0),
            Field::Evidence => {
                record.evidence = patterns
                    .integer
                    .find_iter(value)
                    .filter_map(|m| m.as_str().parse().ok())
                    .collect();
            }
            Field::Rule => record.rule = Some(value.to_string()),
        }
    }
    record
}
