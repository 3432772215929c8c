pub mod attempt;
pub mod cycle;
pub mod necessity;
pub mod schedule;
pub mod sm2_state;

pub use attempt::{Attempt, ScoringStatus, SelfEvaluation, TestResult, TimestampMs};
pub use cycle::{CategoryDetail, LearningCycle, Problem, Session, UnitDetail};
pub use necessity::{
    GroupNecessityResult, GroupReason, HigherNecessity, Necessity, NecessityReason,
    NecessityResult, Severity,
};
pub use schedule::{NO_HISTORY_SENTINEL, NextReview, ProblemSchedule};
pub use sm2_state::Sm2State;
