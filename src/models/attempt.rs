//! A single recorded trial of a problem, as the study screen stores it.
use serde::{Deserialize, Serialize};

/// Unix time in milliseconds.
pub type TimestampMs = i64;

/// How sure the learner felt about their answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelfEvaluation {
    NotSure,
    Imperfect,
    Confident,
    #[default]
    Unrated,
}

impl SelfEvaluation {
    pub const ALL: [SelfEvaluation; 4] = [
        SelfEvaluation::NotSure,
        SelfEvaluation::Imperfect,
        SelfEvaluation::Confident,
        SelfEvaluation::Unrated,
    ];
}

/// Whether the answer was marked right or wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoringStatus {
    Correct,
    Incorrect,
    #[default]
    Unrated,
}

impl ScoringStatus {
    pub const ALL: [ScoringStatus; 3] = [
        ScoringStatus::Correct,
        ScoringStatus::Incorrect,
        ScoringStatus::Unrated,
    ];
}

/// Per-problem result inside a session. The session carries the timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub problem_index: u32,
    #[serde(default)]
    pub self_evaluation: SelfEvaluation,
    #[serde(default)]
    pub scoring_status: ScoringStatus,
    #[serde(default)]
    pub time_spent_ms: i64,
}

/// A test result stamped with the time of the session it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub problem_index: u32,
    pub self_evaluation: SelfEvaluation,
    pub scoring_status: ScoringStatus,
    pub time_spent_ms: i64,
    pub attempted_at: TimestampMs,
}

impl Attempt {
    pub fn from_result(result: &TestResult, attempted_at: TimestampMs) -> Self {
        Self {
            problem_index: result.problem_index,
            self_evaluation: result.self_evaluation,
            scoring_status: result.scoring_status,
            time_spent_ms: result.time_spent_ms,
            attempted_at,
        }
    }
}
