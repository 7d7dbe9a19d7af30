use std::collections::HashSet;
use studyplan_core::{DayBuckets, DayIndex, Task};
use uuid::Uuid;

fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn task(n: u128, day: Option<DayIndex>) -> Task {
    let mut task = Task::with_id(id(n), "Read", "Cells", "08:00", "09:00");
    task.day = day;
    task
}

fn assert_union_invariant(buckets: &DayBuckets, tasks: &[Task]) {
    let flattened = buckets.flatten();
    let unique: HashSet<Uuid> = flattened.iter().copied().collect();
    let expected: HashSet<Uuid> = tasks.iter().map(|task| task.id).collect();
    assert_eq!(flattened.len(), unique.len(), "duplicate ids in buckets");
    assert_eq!(unique, expected);
}

#[test]
fn seeding_honors_explicit_day_and_defaults_to_monday() {
    let tasks = vec![
        task(1, None),
        task(2, Some(DayIndex::WEDNESDAY)),
        task(3, None),
        task(4, Some(DayIndex::WEDNESDAY)),
    ];

    let buckets = DayBuckets::from_tasks(&tasks);

    assert_eq!(buckets.bucket(DayIndex::MONDAY), &[id(1), id(3)]);
    assert_eq!(buckets.bucket(DayIndex::WEDNESDAY), &[id(2), id(4)]);
    assert!(buckets.bucket(DayIndex::SUNDAY).is_empty());
    assert_union_invariant(&buckets, &tasks);
}

#[test]
fn day_lookup_maps_every_scheduled_task() {
    let tasks = vec![
        task(1, None),
        task(2, Some(DayIndex::FRIDAY)),
        task(3, Some(DayIndex::SUNDAY)),
    ];
    let buckets = DayBuckets::from_tasks(&tasks);

    let days = buckets.day_lookup();

    assert_eq!(days.len(), 3);
    assert_eq!(days[&id(1)], DayIndex::MONDAY);
    assert_eq!(days[&id(2)], DayIndex::FRIDAY);
    assert_eq!(days[&id(3)], DayIndex::SUNDAY);
    assert!(tasks.iter().all(|task| Some(days[&task.id]) == buckets.day_of(task.id)));
}

#[test]
fn rebuild_preserves_recorded_positions_and_appends_new_tasks() {
    let tasks = vec![task(1, None), task(2, None), task(3, Some(DayIndex::FRIDAY))];
    let buckets = DayBuckets::from_tasks(&tasks);
    let reordered = DayBuckets::from_days([
        vec![id(2), id(1)],
        vec![],
        vec![],
        vec![],
        vec![id(3)],
        vec![],
        vec![],
    ])
    .unwrap();
    assert_ne!(buckets, reordered);

    let mut grown = tasks.clone();
    grown.push(task(4, Some(DayIndex::FRIDAY)));
    grown.push(task(5, None));
    // A known task keeps its recorded bucket even if its day field disagrees.
    grown[0].day = Some(DayIndex::SUNDAY);

    let rebuilt = reordered.rebuild_from_tasks(&grown);

    assert_eq!(rebuilt.bucket(DayIndex::MONDAY), &[id(2), id(1), id(5)]);
    assert_eq!(rebuilt.bucket(DayIndex::FRIDAY), &[id(3), id(4)]);
    assert!(rebuilt.bucket(DayIndex::SUNDAY).is_empty());
    assert_union_invariant(&rebuilt, &grown);
}

#[test]
fn rebuild_drops_ids_of_removed_tasks() {
    let tasks = vec![task(1, None), task(2, Some(DayIndex::TUESDAY))];
    let buckets = DayBuckets::from_tasks(&tasks);

    let rebuilt = buckets.rebuild_from_tasks(&tasks[..1]);

    assert_eq!(rebuilt.flatten(), vec![id(1)]);
    assert!(!rebuilt.contains(id(2)));
}

#[test]
fn duplicate_task_ids_are_placed_once() {
    let tasks = vec![task(1, None), task(1, Some(DayIndex::THURSDAY))];

    let buckets = DayBuckets::from_tasks(&tasks);

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets.day_of(id(1)), Some(DayIndex::MONDAY));
}

#[test]
fn from_days_rejects_repeated_ids() {
    let days = [
        vec![id(1)],
        vec![id(1)],
        vec![],
        vec![],
        vec![],
        vec![],
        vec![],
    ];
    assert!(DayBuckets::from_days(days).is_none());
}

#[test]
fn flatten_concatenates_days_in_week_order() {
    let tasks = vec![
        task(1, Some(DayIndex::SUNDAY)),
        task(2, Some(DayIndex::MONDAY)),
        task(3, Some(DayIndex::THURSDAY)),
    ];
    let buckets = DayBuckets::from_tasks(&tasks);

    assert_eq!(buckets.flatten(), vec![id(2), id(3), id(1)]);
    let ordered = buckets
        .ordered_tasks(&tasks)
        .into_iter()
        .map(|task| task.id)
        .collect::<Vec<_>>();
    assert_eq!(ordered, vec![id(2), id(3), id(1)]);
}

#[test]
fn move_to_day_appends_and_rejects_noops() {
    let tasks = vec![task(1, None), task(2, Some(DayIndex::TUESDAY))];
    let buckets = DayBuckets::from_tasks(&tasks);

    let moved = buckets.move_to_day(id(1), DayIndex::TUESDAY).unwrap();
    assert_eq!(moved.bucket(DayIndex::TUESDAY), &[id(2), id(1)]);
    assert!(moved.bucket(DayIndex::MONDAY).is_empty());

    assert!(buckets.move_to_day(id(1), DayIndex::MONDAY).is_none());
    assert!(buckets.move_to_day(id(9), DayIndex::MONDAY).is_none());
    assert!(buckets.remove(id(9)).is_none());
}
