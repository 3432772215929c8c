//! Turns a cycle's sessions into per-problem review histories.

pub mod by_index;
pub mod chrono_index;
pub mod expand;
pub mod sort;

pub use by_index::{GroupedAttempt, GroupedByIndexTestResult, group_by_index};
pub use chrono_index::index_timestamps;
pub use expand::{
    ExpandedCycle, ExpandedProblem, ExpandedSession, ExpandedTestResult, current_attempt_results,
    expand_cycle,
};
pub use sort::{SortKey, sort_by_necessity};
