//! Estimates an SM-2 quality grade (0-5) from an attempt's necessity and how
//! long it took compared to the problem's reference time.

use super::params::QualityParams;
use crate::error::ProgressError;
use crate::models::{ScoringStatus, SelfEvaluation};
use crate::necessity::classify;
use log::error;

/// Like [`estimate_quality`], but reports invalid durations instead of
/// degrading to quality 0.
pub fn try_estimate_quality(
    self_evaluation: SelfEvaluation,
    scoring_status: ScoringStatus,
    time_spent_ms: i64,
    ref_time_ms: i64,
    params: &QualityParams,
) -> Result<u8, ProgressError> {
    if time_spent_ms < 0 || ref_time_ms < 0 {
        return Err(ProgressError::InvalidDuration {
            time_spent_ms,
            ref_time_ms,
        });
    }

    // Unrated results fall back to their alternative severity.
    let severity = classify(self_evaluation, scoring_status).alternative_level();
    let base = params
        .base_quality
        .get(severity as usize)
        .copied()
        .unwrap_or(0);

    Ok(adjust_by_time(base, time_spent_ms, ref_time_ms, params))
}

/// Returns quality 0 for negative durations, logging the problem.
pub fn estimate_quality(
    self_evaluation: SelfEvaluation,
    scoring_status: ScoringStatus,
    time_spent_ms: i64,
    ref_time_ms: i64,
    params: &QualityParams,
) -> u8 {
    try_estimate_quality(
        self_evaluation,
        scoring_status,
        time_spent_ms,
        ref_time_ms,
        params,
    )
    .unwrap_or_else(|e| {
        error!("quality estimation failed, using 0: {e}");
        0
    })
}

fn adjust_by_time(base: u8, time_spent_ms: i64, ref_time_ms: i64, params: &QualityParams) -> u8 {
    if base <= 2 || ref_time_ms <= 0 {
        return base;
    }

    let ratio = (time_spent_ms as f64 / ref_time_ms as f64).min(params.time_ratio_limit);
    let slow_threshold = if base == 5 {
        params.slow_threshold_top
    } else {
        params.slow_threshold_high
    };

    let mut adjustment = 0;
    if ratio < params.fast_threshold {
        adjustment = params.adjustment_step;
    } else if ratio >= slow_threshold {
        adjustment = -params.adjustment_step;
    }
    // Speed never lifts the top tier.
    if base == 5 && adjustment > 0 {
        adjustment = 0;
    }

    let adjusted = (base as i32 + adjustment)
        .min(params.max_quality_after_adjustment)
        .max(params.min_quality_after_adjustment);
    adjusted.clamp(0, 5) as u8
}
