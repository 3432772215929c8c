//! Review-necessity result types.
//!
//! A necessity is either rated with a severity, or unrated with a best-guess
//! alternative severity. Consumers that only need a number use [`Necessity::level`],
//! which reports `-1` for unrated results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How urgently a problem needs review, from fine (0) to urgent (3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    Fine = 0,
    Low = 1,
    High = 2,
    Urgent = 3,
}

impl Severity {
    pub fn as_level(self) -> i8 {
        self as i8
    }

    pub fn from_level(level: i8) -> Option<Self> {
        match level {
            0 => Some(Severity::Fine),
            1 => Some(Severity::Low),
            2 => Some(Severity::High),
            3 => Some(Severity::Urgent),
            _ => None,
        }
    }
}

impl From<Severity> for u8 {
    fn from(s: Severity) -> u8 {
        s as u8
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        i8::try_from(value)
            .ok()
            .and_then(Severity::from_level)
            .ok_or_else(|| format!("severity out of range: {value}"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Necessity {
    Rated(Severity),
    Unrated { alternative: Severity },
}

impl Necessity {
    /// Numeric level, `-1` when unrated.
    pub fn level(&self) -> i8 {
        match self {
            Necessity::Rated(s) => s.as_level(),
            Necessity::Unrated { .. } => -1,
        }
    }

    /// The rated severity, or the alternative when unrated.
    pub fn alternative(&self) -> Severity {
        match *self {
            Necessity::Rated(s) => s,
            Necessity::Unrated { alternative } => alternative,
        }
    }

    pub fn is_unrated(&self) -> bool {
        matches!(self, Necessity::Unrated { .. })
    }
}

/// Why an individual attempt got its necessity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NecessityReason {
    OverconfidenceError,
    MistakeNotSure,
    MistakeImperfect,
    UncertainCorrect,
    ImperfectCorrect,
    Understood,
    FullyUnrated,
    ScoreUnratedConfident,
    ScoreUnratedImperfect,
    ScoreUnratedNotSure,
    SelfUnratedCorrect,
    SelfUnratedIncorrect,
}

impl NecessityReason {
    pub fn label(self) -> &'static str {
        match self {
            NecessityReason::OverconfidenceError => "Overconfident mistake",
            NecessityReason::MistakeNotSure => "Mistake",
            NecessityReason::MistakeImperfect => "Unsure mistake",
            NecessityReason::UncertainCorrect => "Lucky guess",
            NecessityReason::ImperfectCorrect => "Unsure correct",
            NecessityReason::Understood => "Understood",
            NecessityReason::FullyUnrated => "Unrated",
            NecessityReason::ScoreUnratedConfident => "Unscored (confident)",
            NecessityReason::ScoreUnratedImperfect => "Unscored (unsure)",
            NecessityReason::ScoreUnratedNotSure => "Unscored (no idea)",
            NecessityReason::SelfUnratedCorrect => "Correct (no self-rating)",
            NecessityReason::SelfUnratedIncorrect => "Mistake (no self-rating)",
        }
    }
}

impl fmt::Display for NecessityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a group of recent attempts got its necessity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupReason {
    ConsecutiveMistakes,
    FailedLatestAttempt,
    FailedSecondToLastAttempt,
    ConsecutiveCorrect,
    InsufficientRatedAttempts,
}

impl GroupReason {
    pub fn label(self) -> &'static str {
        match self {
            GroupReason::ConsecutiveMistakes => "Consecutive mistakes",
            GroupReason::FailedLatestAttempt => "Missed last time",
            GroupReason::FailedSecondToLastAttempt => "Missed the time before",
            GroupReason::ConsecutiveCorrect => "Consecutive correct",
            GroupReason::InsufficientRatedAttempts => "Not enough attempts",
        }
    }
}

impl fmt::Display for GroupReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NecessityResult {
    pub necessity: Necessity,
    pub reason: NecessityReason,
}

impl NecessityResult {
    pub fn level(&self) -> i8 {
        self.necessity.level()
    }

    pub fn alternative_level(&self) -> Severity {
        self.necessity.alternative()
    }

    pub fn is_unrated(&self) -> bool {
        self.necessity.is_unrated()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupNecessityResult {
    pub necessity: Necessity,
    pub reason: GroupReason,
}

impl GroupNecessityResult {
    pub fn level(&self) -> i8 {
        self.necessity.level()
    }

    pub fn alternative_level(&self) -> Severity {
        self.necessity.alternative()
    }

    pub fn is_group(&self) -> bool {
        true
    }

    /// True only when neither of the two recent attempts could be rated.
    pub fn is_unrated(&self) -> bool {
        self.necessity.is_unrated()
    }
}

/// The stronger of an attempt's own necessity and its problem's group necessity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum HigherNecessity {
    Individual(NecessityResult),
    Group(GroupNecessityResult),
}

impl HigherNecessity {
    /// Picks the group result only when its level is strictly higher.
    pub fn pick(individual: NecessityResult, group: GroupNecessityResult) -> Self {
        if group.level() > individual.level() {
            HigherNecessity::Group(group)
        } else {
            HigherNecessity::Individual(individual)
        }
    }

    pub fn level(&self) -> i8 {
        match self {
            HigherNecessity::Individual(r) => r.level(),
            HigherNecessity::Group(g) => g.level(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HigherNecessity::Individual(r) => r.reason.label(),
            HigherNecessity::Group(g) => g.reason.label(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, HigherNecessity::Group(_))
    }
}
