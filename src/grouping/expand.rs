//! Joins a cycle's raw session results with problem, unit and category metadata.

use crate::models::{
    CategoryDetail, LearningCycle, NecessityResult, Problem, ScoringStatus, SelfEvaluation,
    TestResult, TimestampMs, UnitDetail,
};
use crate::necessity::classify;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A problem with its unit and category resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedProblem {
    pub problem: Problem,
    pub unit: Option<UnitDetail>,
    pub category: Option<CategoryDetail>,
    pub latest_attempted_at: Option<TimestampMs>,
}

impl ExpandedProblem {
    pub fn unit_name(&self) -> &str {
        self.unit.as_ref().map_or("", |u| u.name.as_str())
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("", |c| c.name.as_str())
    }
}

/// A test result stamped with its session time, classified, and carrying a
/// copy of its problem's metadata as it was when the result was built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedTestResult {
    pub result: TestResult,
    pub attempt_at: TimestampMs,
    pub necessity: NecessityResult,
    pub problem_number: u32,
    pub unit_id: Option<String>,
    pub category_id: Option<String>,
    pub unit: Option<UnitDetail>,
    pub category: Option<CategoryDetail>,
}

impl ExpandedTestResult {
    pub fn problem_index(&self) -> u32 {
        self.result.problem_index
    }

    pub fn unit_name(&self) -> &str {
        self.unit.as_ref().map_or("", |u| u.name.as_str())
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("", |c| c.name.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedSession {
    pub attempted_at: TimestampMs,
    pub results: Vec<ExpandedTestResult>,
    pub results_by_index: HashMap<u32, ExpandedTestResult>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedCycle {
    pub cycle_start_at: TimestampMs,
    pub problems: Vec<ExpandedProblem>,
    pub sessions: Vec<ExpandedSession>,
    pub problem_map: HashMap<u32, Problem>,
    pub unit_map: HashMap<String, UnitDetail>,
    pub category_map: HashMap<String, CategoryDetail>,
    pub unit_names: Vec<String>,
    pub category_names: Vec<String>,
}

impl ExpandedCycle {
    pub fn problem(&self, index: u32) -> Option<&ExpandedProblem> {
        self.problems.iter().find(|p| p.problem.index == index)
    }
}

/// Lookup tables shared by all expansion steps.
struct Lookup<'a> {
    units: &'a HashMap<String, UnitDetail>,
    categories: &'a HashMap<String, CategoryDetail>,
}

impl Lookup<'_> {
    fn unit(&self, id: Option<&String>) -> Option<UnitDetail> {
        id.and_then(|id| self.units.get(id)).cloned()
    }

    fn category(&self, id: Option<&String>) -> Option<CategoryDetail> {
        id.and_then(|id| self.categories.get(id)).cloned()
    }

    fn expand_result(
        &self,
        result: TestResult,
        attempt_at: TimestampMs,
        problem: &Problem,
    ) -> ExpandedTestResult {
        let necessity = classify(result.self_evaluation, result.scoring_status);
        ExpandedTestResult {
            result,
            attempt_at,
            necessity,
            problem_number: problem.problem_number,
            unit_id: problem.unit_id.clone(),
            category_id: problem.category_id.clone(),
            unit: self.unit(problem.unit_id.as_ref()),
            category: self.category(problem.category_id.as_ref()),
        }
    }
}

fn index_results(results: &[ExpandedTestResult]) -> HashMap<u32, ExpandedTestResult> {
    results
        .iter()
        .map(|r| (r.problem_index(), r.clone()))
        .collect()
}

/// Expands a cycle. Results that reference a problem index missing from the
/// cycle are dropped with a warning.
pub fn expand_cycle(cycle: &LearningCycle) -> ExpandedCycle {
    let problem_map: HashMap<u32, Problem> =
        cycle.problems.iter().map(|p| (p.index, p.clone())).collect();
    let unit_map: HashMap<String, UnitDetail> =
        cycle.units.iter().map(|u| (u.id.clone(), u.clone())).collect();
    let category_map: HashMap<String, CategoryDetail> = cycle
        .categories
        .iter()
        .map(|c| (c.id.clone(), c.clone()))
        .collect();

    let lookup = Lookup {
        units: &unit_map,
        categories: &category_map,
    };

    let sessions: Vec<ExpandedSession> = cycle
        .sessions
        .iter()
        .map(|session| {
            let results: Vec<ExpandedTestResult> = session
                .results
                .iter()
                .filter_map(|result| match problem_map.get(&result.problem_index) {
                    Some(problem) => {
                        Some(lookup.expand_result(result.clone(), session.attempted_at, problem))
                    }
                    None => {
                        warn!(
                            "session at {} has a result for unknown problem {}",
                            session.attempted_at, result.problem_index
                        );
                        None
                    }
                })
                .collect();
            let results_by_index = index_results(&results);
            ExpandedSession {
                attempted_at: session.attempted_at,
                results,
                results_by_index,
            }
        })
        .collect();

    let mut latest: HashMap<u32, TimestampMs> = HashMap::new();
    for result in sessions.iter().flat_map(|s| s.results.iter()) {
        latest
            .entry(result.problem_index())
            .and_modify(|t| *t = (*t).max(result.attempt_at))
            .or_insert(result.attempt_at);
    }

    let problems = cycle
        .problems
        .iter()
        .map(|problem| ExpandedProblem {
            problem: problem.clone(),
            unit: lookup.unit(problem.unit_id.as_ref()),
            category: lookup.category(problem.category_id.as_ref()),
            latest_attempted_at: latest.get(&problem.index).copied(),
        })
        .collect();

    ExpandedCycle {
        cycle_start_at: cycle.cycle_start_at,
        problems,
        sessions,
        unit_names: cycle.units.iter().map(|u| u.name.clone()).collect(),
        category_names: cycle.categories.iter().map(|c| c.name.clone()).collect(),
        problem_map,
        unit_map,
        category_map,
    }
}

/// Builds the result set of an in-progress attempt that has not been saved yet.
/// Every problem of the cycle gets a result; missing ratings are unrated and
/// missing times are zero.
pub fn current_attempt_results(
    attempt_at: TimestampMs,
    cycle: &ExpandedCycle,
    self_evaluations: &HashMap<u32, SelfEvaluation>,
    scoring_statuses: &HashMap<u32, ScoringStatus>,
    elapsed_ms: &HashMap<u32, i64>,
) -> Vec<ExpandedTestResult> {
    let lookup = Lookup {
        units: &cycle.unit_map,
        categories: &cycle.category_map,
    };

    cycle
        .problems
        .iter()
        .map(|expanded| {
            let index = expanded.problem.index;
            let result = TestResult {
                problem_index: index,
                self_evaluation: self_evaluations.get(&index).copied().unwrap_or_default(),
                scoring_status: scoring_statuses.get(&index).copied().unwrap_or_default(),
                time_spent_ms: elapsed_ms.get(&index).copied().unwrap_or(0),
            };
            lookup.expand_result(result, attempt_at, &expanded.problem)
        })
        .collect()
}
