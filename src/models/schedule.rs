//! Output of the scheduler: when each problem should be reviewed next.
use super::TimestampMs;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel used by display code for "no history yet".
pub const NO_HISTORY_SENTINEL: TimestampMs = -1;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

fn utc_day(ms: TimestampMs) -> i64 {
    ms.div_euclid(DAY_MS)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NextReview {
    NoHistory,
    At(TimestampMs),
}

impl NextReview {
    pub fn to_sentinel(self) -> TimestampMs {
        match self {
            NextReview::NoHistory => NO_HISTORY_SENTINEL,
            NextReview::At(ms) => ms,
        }
    }

    pub fn from_sentinel(ms: TimestampMs) -> Self {
        if ms == NO_HISTORY_SENTINEL {
            NextReview::NoHistory
        } else {
            NextReview::At(ms)
        }
    }

    pub fn is_due(self, now: TimestampMs) -> bool {
        matches!(self, NextReview::At(ms) if ms <= now)
    }

    /// Formats as `YYYY-MM-DD HH:MM:SS UTC`, or `no history`.
    pub fn format_utc(self) -> String {
        match self {
            NextReview::NoHistory => "no history".to_string(),
            NextReview::At(ms) => match DateTime::<Utc>::from_timestamp_millis(ms) {
                Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                None => format!("{ms} ms"),
            },
        }
    }
}

/// Problem index to next review, ordered by index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemSchedule {
    pub entries: BTreeMap<u32, NextReview>,
}

impl ProblemSchedule {
    pub fn get(&self, problem_index: u32) -> Option<NextReview> {
        self.entries.get(&problem_index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The map shape display code expects, with `-1` for no history.
    pub fn to_sentinel_map(&self) -> BTreeMap<u32, TimestampMs> {
        self.entries
            .iter()
            .map(|(&index, review)| (index, review.to_sentinel()))
            .collect()
    }

    /// Problems ordered by next review time, earliest first. Problems with no
    /// history come last, by index.
    pub fn due_order(&self) -> Vec<(u32, NextReview)> {
        let mut ordered: Vec<_> = self.entries.iter().map(|(&i, &r)| (i, r)).collect();
        ordered.sort_by_key(|&(index, review)| match review {
            NextReview::At(ms) => (0, ms, index),
            NextReview::NoHistory => (1, 0, index),
        });
        ordered
    }

    pub fn due_at(&self, now: TimestampMs) -> Vec<u32> {
        self.due_order()
            .into_iter()
            .filter(|(_, review)| review.is_due(now))
            .map(|(index, _)| index)
            .collect()
    }

    /// Share of problems whose next review falls on a later UTC day than
    /// `now`. Problems with no history are not fixed; an empty schedule is 0.
    pub fn fixation(&self, now: TimestampMs) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let today = utc_day(now);
        let fixed = self
            .entries
            .values()
            .filter(|review| matches!(review, NextReview::At(ms) if utc_day(*ms) > today))
            .count();
        fixed as f64 / self.entries.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> ProblemSchedule {
        let mut entries = BTreeMap::new();
        entries.insert(0, NextReview::At(5_000));
        entries.insert(1, NextReview::NoHistory);
        entries.insert(2, NextReview::At(1_000));
        ProblemSchedule { entries }
    }

    #[test]
    fn test_sentinel_map() {
        let map = schedule().to_sentinel_map();
        assert_eq!(map[&1], -1);
        assert_eq!(map[&2], 1_000);
    }

    #[test]
    fn test_due_order_puts_no_history_last() {
        let order: Vec<u32> = schedule().due_order().into_iter().map(|(i, _)| i).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn test_due_at() {
        assert_eq!(schedule().due_at(2_000), vec![2]);
    }

    #[test]
    fn test_format_utc() {
        assert_eq!(NextReview::NoHistory.format_utc(), "no history");
        assert_eq!(
            NextReview::At(1_735_718_400_000).format_utc(),
            "2025-01-01 08:00:00 UTC"
        );
    }

    #[test]
    fn test_fixation() {
        let mut entries = BTreeMap::new();
        entries.insert(0, NextReview::At(3 * DAY_MS));
        entries.insert(1, NextReview::At(DAY_MS + 5_000));
        entries.insert(2, NextReview::NoHistory);
        entries.insert(3, NextReview::At(0));
        let schedule = ProblemSchedule { entries };

        // Later the same day is not yet fixed.
        assert_eq!(schedule.fixation(DAY_MS + 1_000), 0.25);
        assert_eq!(schedule.fixation(0), 0.5);
        assert_eq!(ProblemSchedule::default().fixation(0), 0.0);
    }
}
