use study_progress::grouping::{SortKey, sort_by_necessity};
use study_progress::models::GroupReason;
use study_progress::{LearningCycle, NextReview, calculate_schedule, expand_cycle, group_by_index};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const HOUR_MS: i64 = 60 * 60 * 1000;
const CYCLE_START: i64 = 1_735_718_400_000;

fn cycle() -> LearningCycle {
    let json = format!(
        r#"{{
  "cycleStartAt": {start},
  "problems": [
    {{ "index": 0, "unitId": "u1", "categoryId": "math", "problemNumber": 1 }},
    {{ "index": 1, "unitId": "u1", "categoryId": "math", "problemNumber": 2 }},
    {{ "index": 2, "unitId": "u2", "categoryId": "kanji", "problemNumber": 1 }}
  ],
  "units": [
    {{ "id": "u1", "name": "Fractions" }},
    {{ "id": "u2", "name": "Radicals" }}
  ],
  "categories": [
    {{ "id": "math", "name": "Math" }},
    {{ "id": "kanji", "name": "Kanji" }}
  ],
  "sessions": [
    {{ "attemptedAt": {first}, "results": [
      {{ "problemIndex": 0, "selfEvaluation": "confident", "scoringStatus": "correct", "timeSpentMs": 1000 }},
      {{ "problemIndex": 1, "selfEvaluation": "confident", "scoringStatus": "incorrect", "timeSpentMs": 3000 }}
    ] }},
    {{ "attemptedAt": {second}, "results": [
      {{ "problemIndex": 0, "selfEvaluation": "confident", "scoringStatus": "correct", "timeSpentMs": 1000 }},
      {{ "problemIndex": 1, "selfEvaluation": "confident", "scoringStatus": "incorrect", "timeSpentMs": 3000 }}
    ] }}
  ]
}}"#,
        start = CYCLE_START,
        first = CYCLE_START + DAY_MS,
        second = CYCLE_START + 3 * DAY_MS,
    );
    LearningCycle::from_json(&json).unwrap()
}

#[test]
fn test_schedule_from_document() {
    let schedule = calculate_schedule(&cycle());

    // Math reference time is 2000 ms, so problem 0 answers fast at quality 5 twice.
    assert_eq!(
        schedule.get(0),
        Some(NextReview::At(CYCLE_START + 3 * DAY_MS + 6 * DAY_MS))
    );
    // Two failures: interval 1, review again within the hour.
    assert_eq!(
        schedule.get(1),
        Some(NextReview::At(CYCLE_START + 3 * DAY_MS + HOUR_MS))
    );
    assert_eq!(schedule.get(2), Some(NextReview::NoHistory));

    let order: Vec<u32> = schedule.due_order().into_iter().map(|(i, _)| i).collect();
    assert_eq!(order, vec![1, 0, 2]);
}

#[test]
fn test_grouping_from_document() {
    let expanded = expand_cycle(&cycle());
    let groups = group_by_index(&expanded, &[], Some(CYCLE_START + 10 * DAY_MS));

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].group_necessity.reason, GroupReason::ConsecutiveCorrect);
    assert_eq!(groups[1].group_necessity.reason, GroupReason::ConsecutiveMistakes);
    assert_eq!(groups[1].group_necessity.level(), 3);
    assert!(groups[2].results.is_empty());
    assert_eq!(groups[2].unit.as_ref().unwrap().name, "Radicals");

    let sorted = sort_by_necessity(&groups, SortKey::Necessity);
    assert_eq!(sorted[0].problem_index, 1);
    assert_eq!(sorted[2].problem_index, 2);
}

#[test]
fn test_schedule_is_reproducible() {
    let c = cycle();
    assert_eq!(calculate_schedule(&c), calculate_schedule(&c));
}
