//! Lenient answer parser: strict JSON, then syntactic repair, then regex
//! salvage. Each stage runs only if the previous one failed.

pub mod repair;
pub mod salvage;
pub mod strict;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use syllog_core::config::ParserConfig;
use syllog_core::constants::{STEP_1_KEY, STEP_2_KEY};
use syllog_core::traits::TextRepair;
use syllog_core::StatementRecord;
use tracing::{debug, warn};

pub use repair::BuiltinRepair;

/// Which stage produced a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStage {
    Strict,
    Repaired,
    Salvaged,
    Unparseable,
}

/// Sections recovered from an answer. Absent premises are `None`; results
/// that could not be recovered are omitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedAnswer {
    pub premise_1: Option<StatementRecord>,
    pub premise_2: Option<StatementRecord>,
    pub results: Vec<StatementRecord>,
}

/// Outcome of a lenient parse, tagged with the stage that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Strict(ParsedAnswer),
    Repaired(ParsedAnswer),
    Salvaged(ParsedAnswer),
    Unparseable,
}

impl ParseOutcome {
    pub fn stage(&self) -> ParseStage {
        match self {
            Self::Strict(_) => ParseStage::Strict,
            Self::Repaired(_) => ParseStage::Repaired,
            Self::Salvaged(_) => ParseStage::Salvaged,
            Self::Unparseable => ParseStage::Unparseable,
        }
    }

    pub fn answer(&self) -> Option<&ParsedAnswer> {
        match self {
            Self::Strict(a) | Self::Repaired(a) | Self::Salvaged(a) => Some(a),
            Self::Unparseable => None,
        }
    }

    pub fn into_answer(self) -> Option<ParsedAnswer> {
        match self {
            Self::Strict(a) | Self::Repaired(a) | Self::Salvaged(a) => Some(a),
            Self::Unparseable => None,
        }
    }

    /// `false` once regex salvage was needed or nothing was recovered.
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Strict(_) | Self::Repaired(_))
    }
}

/// Per-step outcomes of a two-step answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainOutcome {
    pub step_1: ParseOutcome,
    pub step_2: ParseOutcome,
}

/// Three-stage parser with a pluggable repair stage.
pub struct LenientParser {
    config: ParserConfig,
    repairer: Box<dyn TextRepair>,
}

impl LenientParser {
    pub fn new(config: ParserConfig) -> Self {
        Self::with_repair(config, Box::new(BuiltinRepair))
    }

    /// Use an alternative repairer, e.g. a client for an external repair service.
    pub fn with_repair(config: ParserConfig, repairer: Box<dyn TextRepair>) -> Self {
        Self { config, repairer }
    }

    pub fn parse(&self, text: &str) -> ParseOutcome {
        if let Ok(answer) = strict::parse_answer(text) {
            return ParseOutcome::Strict(answer);
        }

        if let Some(repaired) = self.repaired_text(text) {
            if let Ok(answer) = strict::parse_answer(&repaired) {
                warn!(repairer = self.repairer.name(), "answer parsed after repair");
                return ParseOutcome::Repaired(answer);
            }
        }

        self.salvage(text)
    }

    /// Parse a `{"step 1": …, "step 2": …}` answer, each step independently.
    pub fn parse_chain(&self, text: &str) -> ChainOutcome {
        if let Some(outcome) = Self::chain_from_json(text, ParseOutcome::Strict) {
            return outcome;
        }

        if let Some(repaired) = self.repaired_text(text) {
            if let Some(outcome) = Self::chain_from_json(&repaired, ParseOutcome::Repaired) {
                warn!(repairer = self.repairer.name(), "chain parsed after repair");
                return outcome;
            }
        }

        let (step_1, step_2) = salvage::split_steps(text);
        ChainOutcome {
            step_1: step_1.map_or(ParseOutcome::Unparseable, |t| self.parse(t)),
            step_2: step_2.map_or(ParseOutcome::Unparseable, |t| self.parse(t)),
        }
    }

    fn chain_from_json(text: &str, tag: fn(ParsedAnswer) -> ParseOutcome) -> Option<ChainOutcome> {
        let value: Value = serde_json::from_str(text.trim()).ok()?;
        let object = value.as_object()?;
        let step = |key: &str| {
            object
                .get(key)
                .and_then(strict::answer_from_value)
                .map_or(ParseOutcome::Unparseable, tag)
        };
        let outcome = ChainOutcome {
            step_1: step(STEP_1_KEY),
            step_2: step(STEP_2_KEY),
        };
        let any = outcome.step_1.answer().is_some() || outcome.step_2.answer().is_some();
        any.then_some(outcome)
    }

    fn repaired_text(&self, text: &str) -> Option<String> {
        if !self.config.enable_repair {
            return None;
        }
        self.repairer.repair(text)
    }

    fn salvage(&self, text: &str) -> ParseOutcome {
        if !self.config.enable_salvage {
            return ParseOutcome::Unparseable;
        }
        match salvage::salvage(text) {
            Some(answer) => {
                warn!(
                    premises = answer.premise_1.is_some() as u8 + answer.premise_2.is_some() as u8,
                    results = answer.results.len(),
                    "answer recovered by regex salvage"
                );
                ParseOutcome::Salvaged(answer)
            }
            None => {
                debug!(length = text.len(), "answer unparseable");
                ParseOutcome::Unparseable
            }
        }
    }
}

impl Default for LenientParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl std::fmt::Debug for LenientParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LenientParser")
            .field("config", &self.config)
            .field("repairer", &self.repairer.name())
            .finish()
    }
}

/// Parse with the default configuration and built-in repair.
pub fn parse(text: &str) -> ParseOutcome {
    LenientParser::default().parse(text)
}
