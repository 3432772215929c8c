//! Classifies a single attempt by how urgently it needs review.
//!
//! The table covers every (self-evaluation, scoring) pair:
//! - both unrated, or only the score unrated: unrated, alternative 0
//! - only the self-evaluation unrated: unrated, alternative 0 if correct else 2
//! - correct: confident 0, imperfect 1, not sure 2
//! - incorrect: confident 3, imperfect 2, not sure 2
//!
//! An incorrect answer given with confidence is the most urgent state, since the
//! learner believes they have mastered something they have not.

use crate::models::{
    Necessity, NecessityReason, NecessityResult, ScoringStatus, SelfEvaluation, Severity,
};

pub fn classify(self_evaluation: SelfEvaluation, scoring_status: ScoringStatus) -> NecessityResult {
    use NecessityReason::*;
    use ScoringStatus as S;
    use SelfEvaluation as E;

    let unrated = |reason, alternative| NecessityResult {
        necessity: Necessity::Unrated { alternative },
        reason,
    };
    let rated = |reason, severity| NecessityResult {
        necessity: Necessity::Rated(severity),
        reason,
    };

    match (scoring_status, self_evaluation) {
        (S::Unrated, E::Unrated) => unrated(FullyUnrated, Severity::Fine),
        (S::Unrated, E::Confident) => unrated(ScoreUnratedConfident, Severity::Fine),
        (S::Unrated, E::Imperfect) => unrated(ScoreUnratedImperfect, Severity::Fine),
        (S::Unrated, E::NotSure) => unrated(ScoreUnratedNotSure, Severity::Fine),
        (S::Correct, E::Unrated) => unrated(SelfUnratedCorrect, Severity::Fine),
        (S::Incorrect, E::Unrated) => unrated(SelfUnratedIncorrect, Severity::High),
        (S::Correct, E::Confident) => rated(Understood, Severity::Fine),
        (S::Correct, E::Imperfect) => rated(ImperfectCorrect, Severity::Low),
        (S::Correct, E::NotSure) => rated(UncertainCorrect, Severity::High),
        (S::Incorrect, E::Confident) => rated(OverconfidenceError, Severity::Urgent),
        (S::Incorrect, E::Imperfect) => rated(MistakeImperfect, Severity::High),
        (S::Incorrect, E::NotSure) => rated(MistakeNotSure, Severity::High),
    }
}
