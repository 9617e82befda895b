//! Local syntactic repair of near-JSON model output.
//!
//! Handles the damage language models actually produce: prose around the
//! object, markdown fences, trailing commas, single-quoted strings, unquoted
//! keys, Python literals, and truncation before the closing brackets.

use syllog_core::traits::TextRepair;

/// Deterministic single-pass repairer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRepair;

impl TextRepair for BuiltinRepair {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn repair(&self, text: &str) -> Option<String> {
        let start = text.find('{')?;
        let repaired = Repairer::new(&text[start..]).run();
        (repaired != text).then_some(repaired)
    }
}

struct Repairer {
    chars: Vec<char>,
    pos: usize,
    out: String,
    /// Expected closers for the currently open brackets.
    stack: Vec<char>,
}

impl Repairer {
    fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
            out: String::with_capacity(text.len() + 8),
            stack: Vec::new(),
        }
    }

    fn run(mut self) -> String {
        while let Some(ch) = self.peek() {
            match ch {
                '"' | '\'' => self.string(),
                '{' => self.open('}'),
                '[' => self.open(']'),
                '}' | ']' => {
                    self.close(ch);
                    if self.stack.is_empty() {
                        // Top-level object closed; anything after it is prose.
                        break;
                    }
                }
                '`' => self.skip_fence(),
                c if c == '-' || c.is_ascii_digit() => self.number(),
                c if c.is_alphabetic() || c == '_' => self.word(),
                _ => {
                    self.out.push(ch);
                    self.pos += 1;
                }
            }
        }
        self.finish()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn open(&mut self, closer: char) {
        if let Some(open) = self.peek() {
            self.out.push(open);
        }
        self.stack.push(closer);
        self.pos += 1;
    }

    fn close(&mut self, closer: char) {
        self.pos += 1;
        if !self.stack.contains(&closer) {
            return;
        }
        while let Some(expected) = self.stack.pop() {
            strip_trailing_comma(&mut self.out);
            self.out.push(expected);
            if expected == closer {
                break;
            }
        }
    }

    /// Copy a single- or double-quoted string as a double-quoted JSON string.
    fn string(&mut self) {
        let quote = self.chars[self.pos];
        self.pos += 1;
        self.out.push('"');
        while let Some(ch) = self.peek() {
            self.pos += 1;
            match ch {
                '\\' => match self.peek() {
                    Some('\'') => {
                        self.out.push('\'');
                        self.pos += 1;
                    }
                    Some(next) => {
                        self.out.push('\\');
                        self.out.push(next);
                        self.pos += 1;
                    }
                    None => {}
                },
                c if c == quote => {
                    self.out.push('"');
                    return;
                }
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                c => self.out.push(c),
            }
        }
        // Truncated inside a string.
        self.out.push('"');
    }

    fn number(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E') {
                self.out.push(ch);
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Bare identifier: a key to quote, a Python literal, or a bare string value.
    fn word(&mut self) {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let word: String = self.chars[start..self.pos].iter().collect();

        let mut look = self.pos;
        while self.chars.get(look).is_some_and(|c| c.is_whitespace()) {
            look += 1;
        }
        let is_key = self.chars.get(look) == Some(&':');

        match word.as_str() {
            _ if is_key => {
                self.out.push('"');
                self.out.push_str(&word);
                self.out.push('"');
            }
            "True" | "true" => self.out.push_str("true"),
            "False" | "false" => self.out.push_str("false"),
            "None" | "null" => self.out.push_str("null"),
            _ => {
                self.out.push('"');
                self.out.push_str(&word);
                self.out.push('"');
            }
        }
    }

    fn skip_fence(&mut self) {
        while self.peek() == Some('`') {
            self.pos += 1;
        }
        // Language tag such as ```json
        while self.peek().is_some_and(|c| c.is_alphanumeric()) {
            self.pos += 1;
        }
    }

    fn finish(mut self) -> String {
        let trimmed = self.out.trim_end().len();
        self.out.truncate(trimmed);
        if self.out.ends_with(':') {
            self.out.push_str("null");
        }
        while let Some(closer) = self.stack.pop() {
            strip_trailing_comma(&mut self.out);
            self.out.push(closer);
        }
        self.out
    }
}

fn strip_trailing_comma(out: &mut String) {
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    if out.ends_with(',') {
        out.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repair(text: &str) -> serde_json::Value {
        let fixed = BuiltinRepair.repair(text).unwrap();
        serde_json::from_str(&fixed).unwrap_or_else(|e| panic!("{fixed}: {e}"))
    }

    #[test]
    fn strips_prose_and_fences() {
        let v = repair("Sure! Here is the answer:\n```json\n{\"a\": 1}\n```\nHope it helps.");
        assert_eq!(v["a"], 1);
    }

    #[test]
    fn removes_trailing_commas() {
        let v = repair(r#"{"a": [1, 2,], "b": 3,}"#);
        assert_eq!(v["a"][1], 2);
        assert_eq!(v["b"], 3);
    }

    #[test]
    fn converts_single_quotes_and_python_literals() {
        let v = repair(r#"{'s': 'it"s', 'ok': True, 'none': None}"#);
        assert_eq!(v["s"], "it\"s");
        assert_eq!(v["ok"], true);
        assert!(v["none"].is_null());
    }

    #[test]
    fn quotes_bare_keys() {
        let v = repair(r#"{premise_1: {s: "A", f: 0.5, c: 1e-2}}"#);
        assert_eq!(v["premise_1"]["s"], "A");
        assert_eq!(v["premise_1"]["c"], 0.01);
    }

    #[test]
    fn closes_truncated_document() {
        let v = repair(r#"{"results": [{"s": "A", "eb": [1, 2"#);
        assert_eq!(v["results"][0]["eb"][1], 2);

        let v = repair(r#"{"a": {"b": "trunc"#);
        assert_eq!(v["a"]["b"], "trunc");

        let v = repair(r#"{"a":"#);
        assert!(v["a"].is_null());
    }

    #[test]
    fn copula_strings_survive() {
        let v = repair(r#"{'cp': '-->', 'o': '<->',}"#);
        assert_eq!(v["cp"], "-->");
        assert_eq!(v["o"], "<->");
    }

    #[test]
    fn no_object_means_no_repair() {
        assert!(BuiltinRepair.repair("no json here").is_none());
    }
}
