use studyplan_core::{
    study_stats, ColorRef, DayBuckets, DayIndex, Priority, StudyGoals, Task, Topic,
};
use uuid::Uuid;

fn topic(n: u128, name: &str) -> Topic {
    Topic::with_id(
        Uuid::from_u128(n),
        name,
        ColorRef::token("study-blue").unwrap(),
        Priority::None,
    )
}

fn task(n: u128, topic: &str, day: DayIndex, window: (&str, &str), completed: bool) -> Task {
    let mut task =
        Task::with_id(Uuid::from_u128(n), "Session", topic, window.0, window.1).on_day(day);
    task.completed = completed;
    task
}

fn fixture() -> (Vec<Topic>, Vec<Task>, DayBuckets) {
    let topics = vec![topic(1, "Cells"), topic(2, "Algebra"), topic(3, "Python")];
    let tasks = vec![
        task(10, "Cells", DayIndex::MONDAY, ("13:00", "14:00"), true),
        task(11, "Algebra", DayIndex::MONDAY, ("2:30 pm", "3:15pm"), true),
        task(12, "Algebra", DayIndex::MONDAY, ("18:00", "18:30"), false),
        task(13, "Cells", DayIndex::TUESDAY, ("09:00", "11:00"), true),
        task(14, "Cells", DayIndex::TUESDAY, ("later", "11:00"), true),
    ];
    let buckets = DayBuckets::from_tasks(&tasks);
    (topics, tasks, buckets)
}

#[test]
fn studied_minutes_count_completed_tasks_only() {
    let (topics, tasks, buckets) = fixture();

    let stats = study_stats(&tasks, &topics, &buckets, StudyGoals::default(), DayIndex::MONDAY);

    assert_eq!(stats.minutes_studied_on_day, 105);
    assert_eq!(stats.minutes_studied_in_week, 225);
    assert_eq!(stats.hours_studied_on_day(), 1.75);
    assert_eq!(stats.hours_studied_in_week(), 3.75);
    assert_eq!(stats.daily_goal_percent, 35);
    assert_eq!(stats.weekly_goal_percent, 15);
    assert_eq!(stats.daily_hours_remaining(), 3.25);
}

#[test]
fn overall_and_topic_progress_are_reported() {
    let (topics, tasks, buckets) = fixture();

    let stats = study_stats(&tasks, &topics, &buckets, StudyGoals::default(), DayIndex::TUESDAY);

    assert_eq!(stats.overall_completion, 80);
    assert_eq!(stats.topics.len(), 3);
    assert_eq!(stats.topics[0].progress, 100);
    assert_eq!((stats.topics[1].completed_tasks, stats.topics[1].total_tasks), (1, 2));
    assert_eq!(stats.topics[1].progress, 50);
    assert_eq!(stats.topics[2].progress, 0);
    assert_eq!(stats.topics[2].total_tasks, 0);
}

#[test]
fn goal_percentages_are_capped() {
    let (topics, tasks, buckets) = fixture();
    let goals = StudyGoals::new(1.0, 2.0).unwrap();

    let stats = study_stats(&tasks, &topics, &buckets, goals, DayIndex::TUESDAY);

    assert_eq!(stats.minutes_studied_on_day, 120);
    assert_eq!(stats.daily_goal_percent, 100);
    assert_eq!(stats.weekly_goal_percent, 100);
    assert_eq!(stats.daily_hours_remaining(), 0.0);
}
