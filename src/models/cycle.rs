//! Learning cycle document: the problems of one textbook pass and every session on them.
use super::{TestResult, TimestampMs};
use crate::error::ProgressError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDetail {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    pub id: String,
    pub name: String,
}

/// A problem inside a cycle. `index` is stable for the cycle's lifetime,
/// `problem_number` is the 1-based number shown to the learner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub index: u32,
    #[serde(default)]
    pub unit_id: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    pub problem_number: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub attempted_at: TimestampMs,
    #[serde(default)]
    pub results: Vec<TestResult>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningCycle {
    pub cycle_start_at: TimestampMs,
    pub problems: Vec<Problem>,
    #[serde(default)]
    pub units: Vec<UnitDetail>,
    #[serde(default)]
    pub categories: Vec<CategoryDetail>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl LearningCycle {
    /// Decodes a cycle document handed over by the storage layer.
    pub fn from_json(json: &str) -> Result<Self, ProgressError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn problem(&self, index: u32) -> Option<&Problem> {
        self.problems.iter().find(|p| p.index == index)
    }

    pub fn total_attempts(&self) -> usize {
        self.sessions.iter().map(|s| s.results.len()).sum()
    }
}
