//! Groups every attempt of a problem, across saved sessions and unsaved
//! result sets, into one record per problem index.

use super::chrono_index::index_timestamps;
use super::expand::{ExpandedCycle, ExpandedProblem, ExpandedTestResult};
use crate::models::{
    CategoryDetail, GroupNecessityResult, HigherNecessity, NecessityResult, TimestampMs,
    UnitDetail,
};
use crate::necessity::aggregate_latest;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedAttempt {
    pub result: ExpandedTestResult,
    /// Recency rank of `result.attempt_at`: 0 is the latest past attempt,
    /// negative ranks are in the future.
    pub attempt_order: i64,
    pub group_necessity: GroupNecessityResult,
    pub higher_level_necessity: HigherNecessity,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedByIndexTestResult {
    pub problem_index: u32,
    pub problem_number: u32,
    pub unit: Option<UnitDetail>,
    pub category: Option<CategoryDetail>,
    pub group_necessity: GroupNecessityResult,
    /// Sorted by `attempt_order`. May be empty.
    pub results: Vec<GroupedAttempt>,
    /// One attempt per rank. When a problem appears twice at the same time,
    /// only the later one in `results` is kept here.
    pub results_by_attempt_order: BTreeMap<i64, GroupedAttempt>,
}

impl GroupedByIndexTestResult {
    pub fn latest(&self) -> Option<&GroupedAttempt> {
        self.results_by_attempt_order.get(&0)
    }
}

/// Groups a cycle's attempts by problem. `additional` holds result sets that
/// are not saved yet, such as the attempt in progress. `now` defaults to the
/// current time.
pub fn group_by_index(
    cycle: &ExpandedCycle,
    additional: &[Vec<ExpandedTestResult>],
    now: Option<TimestampMs>,
) -> Vec<GroupedByIndexTestResult> {
    let timestamps = cycle
        .sessions
        .iter()
        .map(|s| s.attempted_at)
        .chain(additional.iter().flatten().map(|r| r.attempt_at));
    let ranks = index_timestamps(timestamps, now);

    let sources: Vec<&[ExpandedTestResult]> = cycle
        .sessions
        .iter()
        .map(|s| s.results.as_slice())
        .chain(additional.iter().map(Vec::as_slice))
        .collect();

    let grouped: Vec<GroupedByIndexTestResult> = cycle
        .problems
        .iter()
        .map(|problem| {
            let attempts: Vec<&ExpandedTestResult> = sources
                .iter()
                .flat_map(|results| results.iter())
                .filter(|r| r.problem_index() == problem.problem.index)
                .inspect(|r| check_metadata(problem, r))
                .collect();
            group_problem(problem, attempts, &ranks)
        })
        .collect();

    debug!(
        "grouped {} problems from {} result sources",
        grouped.len(),
        sources.len()
    );
    grouped
}

fn group_problem(
    problem: &ExpandedProblem,
    mut attempts: Vec<&ExpandedTestResult>,
    ranks: &HashMap<TimestampMs, i64>,
) -> GroupedByIndexTestResult {
    attempts.sort_by_key(|r| r.attempt_at);
    let necessities: Vec<NecessityResult> = attempts.iter().map(|r| r.necessity).collect();
    let group_necessity = aggregate_latest(&necessities);

    let mut results: Vec<GroupedAttempt> = attempts
        .into_iter()
        .map(|r| GroupedAttempt {
            result: r.clone(),
            attempt_order: ranks.get(&r.attempt_at).copied().unwrap_or_default(),
            group_necessity,
            higher_level_necessity: HigherNecessity::pick(r.necessity, group_necessity),
        })
        .collect();
    results.sort_by_key(|a| a.attempt_order);

    let results_by_attempt_order = results
        .iter()
        .map(|a| (a.attempt_order, a.clone()))
        .collect();

    GroupedByIndexTestResult {
        problem_index: problem.problem.index,
        problem_number: problem.problem.problem_number,
        unit: problem.unit.clone(),
        category: problem.category.clone(),
        group_necessity,
        results,
        results_by_attempt_order,
    }
}

/// The problem record is authoritative; a mismatch is only reported.
fn check_metadata(problem: &ExpandedProblem, result: &ExpandedTestResult) {
    if result.unit_id != problem.problem.unit_id
        || result.category_id != problem.problem.category_id
    {
        warn!(
            "result for problem {} at {} has unit {:?} / category {:?}, problem has {:?} / {:?}",
            problem.problem.index,
            result.attempt_at,
            result.unit_id,
            result.category_id,
            problem.problem.unit_id,
            problem.problem.category_id
        );
    }
}
