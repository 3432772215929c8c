use super::by_index::GroupedByIndexTestResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Index,
    #[default]
    Necessity,
}

/// Orders grouped results for a review list. `Necessity` puts the most urgent
/// problems first (unrated last) and breaks ties by problem index.
pub fn sort_by_necessity(
    groups: &[GroupedByIndexTestResult],
    key: SortKey,
) -> Vec<GroupedByIndexTestResult> {
    let mut sorted = groups.to_vec();
    match key {
        SortKey::Index => sorted.sort_by_key(|g| g.problem_index),
        SortKey::Necessity => sorted.sort_by(|a, b| {
            b.group_necessity
                .level()
                .cmp(&a.group_necessity.level())
                .then(a.problem_index.cmp(&b.problem_index))
        }),
    }
    sorted
}
