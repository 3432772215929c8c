//! Recency ranks for timestamps gathered from different sources.
//!
//! Past timestamps (at or before `now`) are ranked 0, 1, 2, ... from the most
//! recent. Future timestamps are ranked -1, -2, ... from the nearest.

use crate::models::TimestampMs;
use chrono::Utc;
use std::collections::{BTreeSet, HashMap};
use std::ops::Bound;

pub fn index_timestamps<I>(timestamps: I, now: Option<TimestampMs>) -> HashMap<TimestampMs, i64>
where
    I: IntoIterator<Item = TimestampMs>,
{
    let now = now.unwrap_or_else(|| Utc::now().timestamp_millis());
    let unique: BTreeSet<TimestampMs> = timestamps.into_iter().collect();

    let mut ranks = HashMap::with_capacity(unique.len());
    let mut past_rank = 0;
    let mut future_rank = -1;

    for &ts in unique.range(..=now).rev() {
        ranks.insert(ts, past_rank);
        past_rank += 1;
    }
    for &ts in unique.range((Bound::Excluded(now), Bound::Unbounded)) {
        ranks.insert(ts, future_rank);
        future_rank -= 1;
    }

    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_past_ranks_from_most_recent() {
        let ranks = index_timestamps([100, 300, 200], Some(1_000));
        assert_eq!(ranks[&300], 0);
        assert_eq!(ranks[&200], 1);
        assert_eq!(ranks[&100], 2);
    }

    #[test]
    fn test_future_ranks_are_negative() {
        let ranks = index_timestamps([100, 2_000, 3_000, 1_000], Some(1_000));
        assert_eq!(ranks[&1_000], 0);
        assert_eq!(ranks[&100], 1);
        assert_eq!(ranks[&2_000], -1);
        assert_eq!(ranks[&3_000], -2);
    }

    #[test]
    fn test_duplicates_and_order_do_not_matter() {
        let a = index_timestamps([5, 1, 3, 3, 5], Some(4));
        let b = index_timestamps([1, 3, 5], Some(4));
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a[&3], 0);
    }

    #[test]
    fn test_empty() {
        assert!(index_timestamps(Vec::new(), Some(0)).is_empty());
    }

    #[test]
    fn test_default_now_treats_old_timestamps_as_past() {
        let ranks = index_timestamps([1, 2], None);
        assert_eq!(ranks[&2], 0);
        assert_eq!(ranks[&1], 1);
    }
}
