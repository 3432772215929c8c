//! Combines the two most recent classifications of a problem into one.

use super::classify;
use crate::models::{
    GroupNecessityResult, GroupReason, Necessity, NecessityResult, ScoringStatus, SelfEvaluation,
    Severity,
};

/// A result above this level counts as a wrong attempt.
const WRONG_ABOVE_LEVEL: i8 = 1;

fn is_wrong(result: &NecessityResult) -> bool {
    result.level() > WRONG_ABOVE_LEVEL
}

/// `recent` holds the two latest results, oldest first.
pub fn aggregate(recent: [NecessityResult; 2]) -> GroupNecessityResult {
    let [previous, latest] = recent;

    let rated = |reason, severity| GroupNecessityResult {
        necessity: Necessity::Rated(severity),
        reason,
    };

    match (is_wrong(&previous), is_wrong(&latest)) {
        (true, true) => rated(GroupReason::ConsecutiveMistakes, Severity::Urgent),
        (false, true) => rated(GroupReason::FailedLatestAttempt, Severity::High),
        (true, false) => rated(GroupReason::FailedSecondToLastAttempt, Severity::Low),
        (false, false) if !previous.is_unrated() && !latest.is_unrated() => {
            rated(GroupReason::ConsecutiveCorrect, Severity::Fine)
        }
        (false, false) => insufficient(),
    }
}

/// Aggregates a chronologically sorted history, oldest first. Histories shorter
/// than two are padded with fully unrated results at the old end.
pub fn aggregate_latest(sorted: &[NecessityResult]) -> GroupNecessityResult {
    let unrated = classify(SelfEvaluation::Unrated, ScoringStatus::Unrated);
    match sorted {
        [] => insufficient(),
        [only] => aggregate([unrated, *only]),
        [.., previous, latest] => aggregate([*previous, *latest]),
    }
}

fn insufficient() -> GroupNecessityResult {
    GroupNecessityResult {
        necessity: Necessity::Unrated {
            alternative: Severity::Fine,
        },
        reason: GroupReason::InsufficientRatedAttempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrong() -> NecessityResult {
        classify(SelfEvaluation::Confident, ScoringStatus::Incorrect)
    }

    fn ok() -> NecessityResult {
        classify(SelfEvaluation::Confident, ScoringStatus::Correct)
    }

    fn unrated() -> NecessityResult {
        classify(SelfEvaluation::Unrated, ScoringStatus::Unrated)
    }

    #[test]
    fn test_consecutive_mistakes() {
        let group = aggregate([wrong(), wrong()]);
        assert_eq!(group.level(), 3);
        assert_eq!(group.reason, GroupReason::ConsecutiveMistakes);
        assert!(group.is_group());
        assert!(!group.is_unrated());
    }

    #[test]
    fn test_failed_latest_and_second_to_last() {
        let latest = aggregate([ok(), wrong()]);
        assert_eq!(latest.level(), 2);
        assert_eq!(latest.reason, GroupReason::FailedLatestAttempt);

        let previous = aggregate([wrong(), ok()]);
        assert_eq!(previous.level(), 1);
        assert_eq!(previous.reason, GroupReason::FailedSecondToLastAttempt);
    }

    #[test]
    fn test_consecutive_correct() {
        let group = aggregate([ok(), ok()]);
        assert_eq!(group.level(), 0);
        assert_eq!(group.alternative_level(), Severity::Fine);
        assert_eq!(group.reason, GroupReason::ConsecutiveCorrect);
    }

    #[test]
    fn test_unrated_attempt_is_insufficient() {
        let group = aggregate([unrated(), ok()]);
        assert_eq!(group.level(), -1);
        assert_eq!(group.alternative_level(), Severity::Fine);
        assert_eq!(group.reason, GroupReason::InsufficientRatedAttempts);
        assert!(group.is_unrated());
    }

    #[test]
    fn test_unrated_does_not_hide_a_mistake() {
        let group = aggregate([unrated(), wrong()]);
        assert_eq!(group.reason, GroupReason::FailedLatestAttempt);
    }

    #[test]
    fn test_level_two_counts_as_wrong() {
        let lucky = classify(SelfEvaluation::NotSure, ScoringStatus::Correct);
        let group = aggregate([lucky, lucky]);
        assert_eq!(group.reason, GroupReason::ConsecutiveMistakes);
    }

    #[test]
    fn test_monotonic() {
        let both = aggregate([wrong(), wrong()]).level();
        let one = aggregate([wrong(), ok()]).level();
        let none = aggregate([ok(), ok()]).level();
        assert!(both >= one && one >= none);
        assert_eq!(both, 3);
    }

    #[test]
    fn test_aggregate_latest_uses_last_two() {
        let group = aggregate_latest(&[wrong(), ok(), ok()]);
        assert_eq!(group.reason, GroupReason::ConsecutiveCorrect);

        let single = aggregate_latest(&[wrong()]);
        assert_eq!(single.reason, GroupReason::FailedLatestAttempt);

        let empty = aggregate_latest(&[]);
        assert!(empty.is_unrated());
    }
}
