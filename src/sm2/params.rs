//! Tuning constants for quality estimation and scheduling.
//!
//! Both structs deserialize from the app's configuration; any missing field
//! falls back to the product default.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityParams {
    /// Below this share of the reference time an answer counts as fast.
    pub fast_threshold: f64,
    /// At or above this share a quality-5 answer counts as slow.
    pub slow_threshold_top: f64,
    /// At or above this share a quality-4 answer counts as slow.
    pub slow_threshold_high: f64,
    pub adjustment_step: i32,
    pub min_quality_after_adjustment: i32,
    pub max_quality_after_adjustment: i32,
    pub time_ratio_limit: f64,
    /// Base quality per necessity level 0..=3.
    pub base_quality: [u8; 4],
}

impl Default for QualityParams {
    fn default() -> Self {
        Self {
            fast_threshold: 0.7,
            slow_threshold_top: 1.0,
            slow_threshold_high: 1.3,
            adjustment_step: 1,
            min_quality_after_adjustment: 3,
            max_quality_after_adjustment: 5,
            time_ratio_limit: 5.0,
            base_quality: [5, 4, 2, 0],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulerParams {
    pub initial_ease_factor: f64,
    pub reset_interval: u32,
    pub reset_repetitions: u32,
    pub first_interval: u32,
    pub second_interval: u32,
    pub ease_coefficient_a: f64,
    pub ease_coefficient_b: f64,
    pub ease_coefficient_c: f64,
    pub min_ease_factor: f64,
    /// Offset used instead of whole days while the interval is at most one day.
    pub immediate_review_ms: i64,
    /// Reference time for problems whose category has no timing data.
    pub default_ref_time_ms: i64,
    pub default_category_id: String,
}

impl Default for SchedulerParams {
    fn default() -> Self {
        Self {
            initial_ease_factor: 2.5,
            reset_interval: 1,
            reset_repetitions: 0,
            first_interval: 1,
            second_interval: 6,
            ease_coefficient_a: 0.1,
            ease_coefficient_b: 0.08,
            ease_coefficient_c: 0.02,
            min_ease_factor: 1.3,
            immediate_review_ms: 60 * 60 * 1000,
            default_ref_time_ms: 60 * 1000,
            default_category_id: "default".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let params: SchedulerParams =
            serde_json::from_str(r#"{ "immediateReviewMs": 600000 }"#).unwrap();
        assert_eq!(params.immediate_review_ms, 600_000);
        assert_eq!(params.second_interval, 6);
        assert_eq!(params.min_ease_factor, 1.3);
    }

    #[test]
    fn test_quality_table_override() {
        let params: QualityParams =
            serde_json::from_str(r#"{ "baseQuality": [5, 4, 3, 0] }"#).unwrap();
        assert_eq!(params.base_quality, [5, 4, 3, 0]);
        assert_eq!(params.fast_threshold, 0.7);
    }
}
