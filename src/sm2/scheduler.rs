//! SM-2 (SuperMemo 2) scheduling over a cycle's full attempt history.
//!
//! - Each problem starts from interval 0, EF 2.5, repetitions 0
//! - Quality 3-5: interval goes 1 day → 6 days → interval × EF, then EF is adjusted
//! - Quality 0-2: repetitions reset to 0 and interval to 1 day; EF is kept
//! - EF never falls below 1.3
//!
//! The state is rebuilt from the whole history on every call instead of being
//! stored, so the schedule is always a pure function of the recorded attempts.

use super::params::{QualityParams, SchedulerParams};
use super::quality::estimate_quality;
use crate::models::{
    Attempt, LearningCycle, NextReview, Problem, ProblemSchedule, Sm2State, TimestampMs,
};
use chrono::Duration;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Applies one graded review to an SM-2 state.
pub fn update_state(state: Sm2State, quality: u8, params: &SchedulerParams) -> Sm2State {
    let quality = quality.min(5);

    if quality < 3 {
        return Sm2State {
            interval: params.reset_interval,
            ease_factor: state.ease_factor,
            repetitions: params.reset_repetitions,
        };
    }

    let interval = match state.repetitions {
        0 => params.first_interval,
        1 => params.second_interval,
        _ => (state.interval as f64 * state.ease_factor).round() as u32,
    };

    let q_diff = 5.0 - quality as f64;
    let ease_factor = (state.ease_factor
        + (params.ease_coefficient_a
            - q_diff * (params.ease_coefficient_b + q_diff * params.ease_coefficient_c)))
        .max(params.min_ease_factor);

    Sm2State {
        interval,
        ease_factor,
        repetitions: state.repetitions + 1,
    }
}

/// Next review time for an interval counted from `from_ms`. Intervals of one
/// day or less map to the short immediate-review offset.
pub fn next_review_at(
    interval_days: u32,
    from_ms: TimestampMs,
    params: &SchedulerParams,
) -> TimestampMs {
    let offset = if interval_days <= 1 {
        Duration::milliseconds(params.immediate_review_ms)
    } else {
        Duration::days(interval_days as i64)
    };
    from_ms.saturating_add(offset.num_milliseconds())
}

/// Mean time spent per category, rounded to whole milliseconds. Results for
/// problems outside the cycle are ignored. Totals are summed in `i128` so
/// oversized timings cannot overflow.
pub fn category_ref_times(
    cycle: &LearningCycle,
    default_category_id: &str,
) -> HashMap<String, i64> {
    let problems: HashMap<u32, &Problem> = cycle.problems.iter().map(|p| (p.index, p)).collect();
    let mut totals: HashMap<String, (i128, i64)> = HashMap::new();

    for result in cycle.sessions.iter().flat_map(|s| s.results.iter()) {
        if let Some(problem) = problems.get(&result.problem_index) {
            let category = problem.category_id.as_deref().unwrap_or(default_category_id);
            let entry = totals.entry(category.to_string()).or_insert((0, 0));
            entry.0 += i128::from(result.time_spent_ms);
            entry.1 += 1;
        }
    }

    totals
        .into_iter()
        .filter(|(_, (_, count))| *count > 0)
        .map(|(category, (total, count))| {
            // Float to int `as` saturates.
            (category, (total as f64 / count as f64).round() as i64)
        })
        .collect()
}

/// Every session result stamped with its session time, grouped by problem
/// and sorted oldest first.
pub fn problem_history(cycle: &LearningCycle) -> HashMap<u32, Vec<Attempt>> {
    let mut attempts: Vec<Attempt> = cycle
        .sessions
        .iter()
        .flat_map(|s| s.results.iter().map(|r| Attempt::from_result(r, s.attempted_at)))
        .collect();
    attempts.sort_by_key(|a| a.attempted_at);

    let mut history: HashMap<u32, Vec<Attempt>> = HashMap::new();
    for attempt in attempts {
        history.entry(attempt.problem_index).or_default().push(attempt);
    }
    history
}

/// Replays and schedules learning cycles with a fixed set of parameters.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    pub quality: QualityParams,
    pub params: SchedulerParams,
}

impl Scheduler {
    pub fn new(quality: QualityParams, params: SchedulerParams) -> Self {
        Self { quality, params }
    }

    /// Replays `history` (oldest first) from a fresh state. Returns the final
    /// state and the time of the last attempt, or `baseline` if there is none.
    pub fn replay(
        &self,
        history: &[Attempt],
        ref_time_ms: i64,
        baseline: TimestampMs,
    ) -> (Sm2State, TimestampMs) {
        history.iter().fold(
            (Sm2State::initial(self.params.initial_ease_factor), baseline),
            |(state, _), attempt| {
                let quality = estimate_quality(
                    attempt.self_evaluation,
                    attempt.scoring_status,
                    attempt.time_spent_ms,
                    ref_time_ms,
                    &self.quality,
                );
                (update_state(state, quality, &self.params), attempt.attempted_at)
            },
        )
    }

    /// Next review for one problem's history; `NoHistory` when it is empty.
    pub fn next_review(
        &self,
        history: &[Attempt],
        ref_time_ms: i64,
        baseline: TimestampMs,
    ) -> NextReview {
        if history.is_empty() {
            return NextReview::NoHistory;
        }
        let (state, last_attempt_at) = self.replay(history, ref_time_ms, baseline);
        NextReview::At(next_review_at(state.interval, last_attempt_at, &self.params))
    }

    /// Schedules every problem of the cycle.
    pub fn schedule_cycle(&self, cycle: &LearningCycle) -> ProblemSchedule {
        let ref_times = category_ref_times(cycle, &self.params.default_category_id);
        let history = problem_history(cycle);

        let mut entries = BTreeMap::new();
        for problem in &cycle.problems {
            let attempts = history.get(&problem.index).map_or(&[][..], Vec::as_slice);
            let category = problem
                .category_id
                .as_deref()
                .unwrap_or(&self.params.default_category_id);
            let ref_time_ms = ref_times
                .get(category)
                .copied()
                .unwrap_or(self.params.default_ref_time_ms);

            let review = self.next_review(attempts, ref_time_ms, cycle.cycle_start_at);
            debug!(
                "problem {}: {} attempts, ref time {} ms, next review {}",
                problem.index,
                attempts.len(),
                ref_time_ms,
                review.format_utc()
            );
            entries.insert(problem.index, review);
        }

        ProblemSchedule { entries }
    }
}

/// Schedules a cycle with the default parameters.
pub fn calculate_schedule(cycle: &LearningCycle) -> ProblemSchedule {
    Scheduler::default().schedule_cycle(cycle)
}
