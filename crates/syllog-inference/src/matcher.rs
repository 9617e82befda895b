//! Structural matcher: classifies a premise pair into one of nine syllogistic
//! configurations.
//!
//! Premise 1 carries the predicate side (`M·P`), premise 2 the subject side
//! (`S·M`). A pair matches only when exactly one of the four term alignments
//! holds; the shared term is `M`, the other term of premise 1 is `P` and the
//! other term of premise 2 is `S`.

use std::fmt;

use syllog_core::errors::StatementError;
use syllog_core::{Copula, EvidentialBase, RuleName, Statement, Term, TruthValue};

use Copula::{Inheritance as INH, Similarity as SIM};
use Orientation::{PredicateSubject as PS, SubjectPredicate as SP};

/// Which terms of the two premises coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// `s1 = s2`
    SubjectSubject,
    /// `s1 = o2`
    SubjectObject,
    /// `o1 = s2`
    ObjectSubject,
    /// `o1 = o2`
    ObjectObject,
}

impl Alignment {
    const ALL: [Alignment; 4] = [
        Self::SubjectSubject,
        Self::SubjectObject,
        Self::ObjectSubject,
        Self::ObjectObject,
    ];

    fn holds(self, first: &Statement, second: &Statement) -> bool {
        match self {
            Self::SubjectSubject => first.subject() == second.subject(),
            Self::SubjectObject => first.subject() == second.object(),
            Self::ObjectSubject => first.object() == second.subject(),
            Self::ObjectObject => first.object() == second.object(),
        }
    }

    /// `M` is the subject of premise 1.
    fn middle_leads_first(self) -> bool {
        matches!(self, Self::SubjectSubject | Self::SubjectObject)
    }

    /// `M` is the subject of premise 2.
    fn middle_leads_second(self) -> bool {
        matches!(self, Self::SubjectSubject | Self::ObjectSubject)
    }
}

/// Direction of a conclusion over the `S`/`P` terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// `S · P`
    SubjectPredicate,
    /// `P · S`
    PredicateSubject,
}

/// One row of a case's conclusion layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conclusion {
    pub orientation: Orientation,
    pub copula: Copula,
    pub rule: RuleName,
}

const fn conclusion(orientation: Orientation, copula: Copula, rule: RuleName) -> Conclusion {
    Conclusion {
        orientation,
        copula,
        rule,
    }
}

const MP_SM: [Conclusion; 2] = [
    conclusion(SP, INH, RuleName::Deduction),
    conclusion(PS, INH, RuleName::ExemplificationPrime),
];
const PM_SM: [Conclusion; 3] = [
    conclusion(SP, INH, RuleName::Abduction),
    conclusion(PS, INH, RuleName::AbductionPrime),
    conclusion(SP, SIM, RuleName::ComparisonPrime),
];
const SIM_MP_SM: [Conclusion; 1] = [conclusion(SP, INH, RuleName::AnalogyPrime)];
const MP_MS: [Conclusion; 3] = [
    conclusion(SP, INH, RuleName::Induction),
    conclusion(PS, INH, RuleName::InductionPrime),
    conclusion(SP, SIM, RuleName::Comparison),
];
const PM_MS: [Conclusion; 2] = [
    conclusion(SP, INH, RuleName::Exemplification),
    conclusion(PS, INH, RuleName::DeductionPrime),
];
const SIM_MP_MS: [Conclusion; 1] = [conclusion(PS, INH, RuleName::AnalogyPrime)];
const MP_SIM_SM: [Conclusion; 1] = [conclusion(SP, INH, RuleName::Analogy)];
const PM_SIM_SM: [Conclusion; 1] = [conclusion(PS, INH, RuleName::Analogy)];
const SIM_SIM: [Conclusion; 1] = [conclusion(SP, SIM, RuleName::Resolution)];

/// The nine premise configurations, in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchCase {
    /// `M-->P`, `S-->M`
    MpSm,
    /// `P-->M`, `S-->M`
    PmSm,
    /// `M<->P`, `S-->M`
    SimMpSm,
    /// `M-->P`, `M-->S`
    MpMs,
    /// `P-->M`, `M-->S`
    PmMs,
    /// `M<->P`, `M-->S`
    SimMpMs,
    /// `M-->P`, `S<->M`
    MpSimSm,
    /// `P-->M`, `S<->M`
    PmSimSm,
    /// `M<->P`, `S<->M`
    SimSim,
}

impl MatchCase {
    pub const ALL: [MatchCase; 9] = [
        Self::MpSm,
        Self::PmSm,
        Self::SimMpSm,
        Self::MpMs,
        Self::PmMs,
        Self::SimMpMs,
        Self::MpSimSm,
        Self::PmSimSm,
        Self::SimSim,
    ];

    /// Short figure label, e.g. `"MP, SM"` or `"M<>P, S<>M"`.
    pub fn figure(self) -> &'static str {
        match self {
            Self::MpSm => "MP, SM",
            Self::PmSm => "PM, SM",
            Self::SimMpSm => "M<>P, SM",
            Self::MpMs => "MP, MS",
            Self::PmMs => "PM, MS",
            Self::SimMpMs => "M<>P, MS",
            Self::MpSimSm => "MP, S<>M",
            Self::PmSimSm => "PM, S<>M",
            Self::SimSim => "M<>P, S<>M",
        }
    }

    /// Copulas of (premise 1, premise 2).
    pub fn copulas(self) -> (Copula, Copula) {
        match self {
            Self::MpSm | Self::PmSm | Self::MpMs | Self::PmMs => (INH, INH),
            Self::SimMpSm | Self::SimMpMs => (SIM, INH),
            Self::MpSimSm | Self::PmSimSm => (INH, SIM),
            Self::SimSim => (SIM, SIM),
        }
    }

    pub fn alignment(self) -> Alignment {
        match self {
            Self::MpSm | Self::SimMpSm | Self::MpSimSm | Self::SimSim => Alignment::SubjectObject,
            Self::PmSm | Self::PmSimSm => Alignment::ObjectObject,
            Self::MpMs | Self::SimMpMs => Alignment::SubjectSubject,
            Self::PmMs => Alignment::ObjectSubject,
        }
    }

    /// Conclusions this case licenses, in output order.
    pub fn conclusions(self) -> &'static [Conclusion] {
        match self {
            Self::MpSm => &MP_SM,
            Self::PmSm => &PM_SM,
            Self::SimMpSm => &SIM_MP_SM,
            Self::MpMs => &MP_MS,
            Self::PmMs => &PM_MS,
            Self::SimMpMs => &SIM_MP_MS,
            Self::MpSimSm => &MP_SIM_SM,
            Self::PmSimSm => &PM_SIM_SM,
            Self::SimSim => &SIM_SIM,
        }
    }

    /// Build a premise pair in this configuration from `(S, M, P)`.
    ///
    /// Deriving from the returned pair always classifies as `self`, provided
    /// the three terms are distinct.
    pub fn instantiate(
        self,
        terms: &SyllogismTerms,
        truth_1: TruthValue,
        truth_2: TruthValue,
        evidence_1: EvidentialBase,
        evidence_2: EvidentialBase,
    ) -> Result<(Statement, Statement), StatementError> {
        let alignment = self.alignment();
        let (copula_1, copula_2) = self.copulas();

        let (s1, o1) = if alignment.middle_leads_first() {
            (terms.middle.clone(), terms.predicate.clone())
        } else {
            (terms.predicate.clone(), terms.middle.clone())
        };
        let (s2, o2) = if alignment.middle_leads_second() {
            (terms.middle.clone(), terms.subject.clone())
        } else {
            (terms.subject.clone(), terms.middle.clone())
        };

        let first = Statement::premise(s1, o1, copula_1, truth_1, evidence_1)?;
        let second = Statement::premise(s2, o2, copula_2, truth_2, evidence_2)?;
        Ok((first, second))
    }

    fn lookup(alignment: Alignment, copulas: (Copula, Copula)) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|case| case.alignment() == alignment && case.copulas() == copulas)
    }
}

impl fmt::Display for MatchCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.figure())
    }
}

/// The subject, middle and predicate terms of a syllogism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllogismTerms {
    pub subject: Term,
    pub middle: Term,
    pub predicate: Term,
}

impl SyllogismTerms {
    pub fn new(subject: impl Into<Term>, middle: impl Into<Term>, predicate: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            middle: middle.into(),
            predicate: predicate.into(),
        }
    }

    /// All three terms differ.
    pub fn is_distinct(&self) -> bool {
        self.subject != self.middle && self.middle != self.predicate && self.subject != self.predicate
    }
}

/// A classified premise pair with its terms resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub case: MatchCase,
    pub terms: SyllogismTerms,
}

impl Match {
    /// `(subject, object)` for a conclusion of the given orientation.
    pub fn oriented(&self, orientation: Orientation) -> (&Term, &Term) {
        match orientation {
            Orientation::SubjectPredicate => (&self.terms.subject, &self.terms.predicate),
            Orientation::PredicateSubject => (&self.terms.predicate, &self.terms.subject),
        }
    }
}

/// Classify a premise pair. `None` when no configuration applies.
pub fn match_premises(first: &Statement, second: &Statement) -> Option<Match> {
    if first.subject() == first.object() || second.subject() == second.object() {
        return None;
    }

    let mut aligned = Alignment::ALL.into_iter().filter(|a| a.holds(first, second));
    let alignment = aligned.next()?;
    if aligned.next().is_some() {
        return None;
    }

    let case = MatchCase::lookup(alignment, (first.copula(), second.copula()))?;

    let (middle, predicate) = if alignment.middle_leads_first() {
        (first.subject(), first.object())
    } else {
        (first.object(), first.subject())
    };
    let subject = if alignment.middle_leads_second() {
        second.object()
    } else {
        second.subject()
    };

    Some(Match {
        case,
        terms: SyllogismTerms {
            subject: subject.clone(),
            middle: middle.clone(),
            predicate: predicate.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stmt(s: &str, cp: Copula, o: &str) -> Statement {
        Statement::premise(s, o, cp, TruthValue::new(0.9, 0.9).unwrap(), [1]).unwrap()
    }

    #[test]
    fn every_alignment_copula_pair_is_unique() {
        for (i, a) in MatchCase::ALL.iter().enumerate() {
            for b in &MatchCase::ALL[i + 1..] {
                assert!(
                    a.alignment() != b.alignment() || a.copulas() != b.copulas(),
                    "{a:?} and {b:?} collide"
                );
            }
        }
    }

    #[test]
    fn resolves_terms_for_deduction_figure() {
        let m = match_premises(&stmt("M", INH, "P"), &stmt("S", INH, "M")).unwrap();
        assert_eq!(m.case, MatchCase::MpSm);
        assert_eq!(m.terms, SyllogismTerms::new("S", "M", "P"));
    }

    #[test]
    fn two_shared_terms_do_not_match() {
        assert!(match_premises(&stmt("A", INH, "B"), &stmt("B", INH, "A")).is_none());
        assert!(match_premises(&stmt("A", INH, "B"), &stmt("A", INH, "B")).is_none());
    }

    #[test]
    fn unsupported_copula_pair_does_not_match() {
        // P<->M with S-->M is not in the table.
        assert!(match_premises(&stmt("P", SIM, "M"), &stmt("S", INH, "M")).is_none());
    }

    #[test]
    fn conclusion_counts_follow_table() {
        let counts: Vec<usize> = MatchCase::ALL.iter().map(|c| c.conclusions().len()).collect();
        assert_eq!(counts, vec![2, 3, 1, 3, 2, 1, 1, 1, 1]);
    }
}
