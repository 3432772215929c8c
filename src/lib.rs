//! Review-progress engine for a study app.
//!
//! Classifies how urgently each problem needs review, groups a learning
//! cycle's attempts per problem, and replays SM-2 over the full history to
//! find each problem's next review time.

pub mod error;
pub mod grouping;
pub mod models;
pub mod necessity;
pub mod sm2;

pub use error::ProgressError;
pub use grouping::{GroupedByIndexTestResult, expand_cycle, group_by_index, index_timestamps};
pub use models::{
    Attempt, GroupNecessityResult, LearningCycle, Necessity, NecessityResult, NextReview,
    ProblemSchedule, ScoringStatus, SelfEvaluation, Severity, Sm2State,
};
pub use necessity::{aggregate, classify};
pub use sm2::{Scheduler, calculate_schedule, estimate_quality};
