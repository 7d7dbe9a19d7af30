use studyplan_core::{recompute_progress, ColorRef, Priority, Task, Topic};
use uuid::Uuid;

fn topic(n: u128, name: &str) -> Topic {
    Topic::with_id(
        Uuid::from_u128(n),
        name,
        ColorRef::token("study-purple").unwrap(),
        Priority::None,
    )
}

fn task(n: u128, topic: &str, completed: bool) -> Task {
    let mut task = Task::with_id(Uuid::from_u128(n), "Study", topic, "09:00", "10:00");
    task.completed = completed;
    task
}

#[test]
fn progress_is_rounded_share_of_completed_tasks() {
    let topics = vec![topic(1, "Cells"), topic(2, "Algebra")];
    let tasks = vec![
        task(10, "Cells", true),
        task(11, "Cells", false),
        task(12, "Cells", false),
        task(20, "Algebra", true),
        task(21, "Algebra", true),
        task(22, "Algebra", false),
    ];

    let recomputed = recompute_progress(&tasks, &topics);
    assert_eq!(recomputed[0].progress, 33);
    assert_eq!(recomputed[1].progress, 67);
}

#[test]
fn topics_without_tasks_settle_at_zero() {
    let mut stale = topic(1, "Python");
    stale.progress = 80;

    let recomputed = recompute_progress(&[task(10, "Cells", true)], &[stale]);
    assert_eq!(recomputed[0].progress, 0);
}

#[test]
fn recompute_is_idempotent_and_leaves_inputs_untouched() {
    let topics = vec![topic(1, "Cells")];
    let tasks = vec![task(10, "Cells", true), task(11, "Cells", false)];

    let once = recompute_progress(&tasks, &topics);
    let twice = recompute_progress(&tasks, &once);
    assert_eq!(once, twice);
    assert_eq!(once[0].progress, 50);
    assert_eq!(topics[0].progress, 0);
}

#[test]
fn progress_matches_exact_topic_name_only() {
    let topics = vec![topic(1, "Algebra"), topic(2, "Algebra II")];
    let tasks = vec![task(10, "Algebra", true), task(11, "Algebra II", false)];

    let recomputed = recompute_progress(&tasks, &topics);
    assert_eq!(recomputed[0].progress, 100);
    assert_eq!(recomputed[1].progress, 0);
}

#[test]
fn progress_stays_within_percentage_bounds() {
    let topics = vec![topic(1, "Cells")];
    for total in 1..=12u128 {
        for done in 0..=total {
            let tasks = (0..total)
                .map(|i| task(100 + i, "Cells", i < done))
                .collect::<Vec<_>>();
            let progress = recompute_progress(&tasks, &topics)[0].progress;
            let expected = ((done as f64) * 100.0 / (total as f64)).round() as u8;
            assert!(progress <= 100);
            assert_eq!(progress, expected, "done={done} total={total}");
        }
    }
}
