pub mod params;
pub mod quality;
pub mod scheduler;

pub use params::{QualityParams, SchedulerParams};
pub use quality::{estimate_quality, try_estimate_quality};
pub use scheduler::{
    Scheduler, calculate_schedule, category_ref_times, next_review_at, problem_history,
    update_state,
};
