use chrono::{NaiveDate, Weekday};
use studyplan_core::{ColorRef, DayIndex, DayIndexError, Priority, Task, TimeOfDay, Topic};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("Cell Functions", "Cells", "13:00", "14:00");

    assert!(!task.id.is_nil());
    assert!(!task.completed);
    assert_eq!(task.day, None);
    assert_eq!(task.color, None);
    assert_eq!(task.priority, Priority::None);
    assert!(task.notes.is_empty());
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(task_id, "Graphing", "Algebra", "18:00", "18:30")
        .on_day(DayIndex::THURSDAY)
        .with_priority(Priority::High);
    task.color = Some(ColorRef::parse("#ff8800").unwrap());

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["topic"], "Algebra");
    assert_eq!(json["start_time"], "18:00");
    assert_eq!(json["day"], 3);
    assert_eq!(json["priority"], "high");
    assert_eq!(json["color"], "#ff8800");
    assert_eq!(json["completed"], false);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn task_deserialization_fills_optional_fields() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "Booleans",
        "topic": "Python",
        "start_time": "7:00 pm",
        "end_time": "8:00pm"
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.day, None);
    assert_eq!(task.priority, Priority::None);
    assert_eq!(task.duration_minutes(), 60);
}

#[test]
fn deserialize_rejects_out_of_range_day() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "Booleans",
        "topic": "Python",
        "start_time": "19:00",
        "end_time": "20:00",
        "day": 7
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(err.to_string().contains("out of range"), "unexpected error: {err}");
}

#[test]
fn day_index_is_monday_based() {
    assert_eq!(DayIndex::from_weekday(Weekday::Mon), DayIndex::MONDAY);
    assert_eq!(DayIndex::from_weekday(Weekday::Sun), DayIndex::SUNDAY);
    let date = NaiveDate::from_ymd_opt(2026, 10, 24).unwrap();
    assert_eq!(DayIndex::from_date(date), DayIndex::SATURDAY);
    assert_eq!(DayIndex::new(6).unwrap().name(), "Sunday");
    assert_eq!(DayIndex::new(7).unwrap_err(), DayIndexError(7));
    assert_eq!(DayIndex::from_raw(-1).unwrap_err(), DayIndexError(-1));
    assert_eq!(DayIndex::all().count(), 7);
}

#[test]
fn effective_color_falls_back_to_topic_color() {
    let topic = Topic::with_id(
        Uuid::new_v4(),
        "Cells",
        ColorRef::token("study-purple").unwrap(),
        Priority::None,
    );
    let topics = vec![topic];
    let mut task = Task::new("Quiz", "Cells", "16:00", "16:30");

    assert_eq!(
        task.effective_color(&topics).map(ColorRef::css_value),
        Some("hsl(var(--study-purple))".to_string())
    );

    task.color = Some(ColorRef::parse("#123456").unwrap());
    assert_eq!(task.effective_color(&topics).map(ColorRef::as_str), Some("#123456"));

    let orphan = Task::new("Quiz", "Deleted topic", "16:00", "16:30");
    assert_eq!(orphan.effective_color(&topics), None);
}

#[test]
fn priority_labels_and_parsing() {
    assert_eq!(Priority::Low.label(), "!");
    assert_eq!(Priority::High.label(), "!!!");
    assert_eq!(Priority::parse(" Medium ").unwrap(), Priority::Medium);
    assert!(Priority::parse("urgent").is_err());
    assert!(Priority::High > Priority::Low);
    assert!(Priority::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(Priority::ALL.map(Priority::title)[3], "High Priority");
    assert_eq!(serde_json::to_value(Priority::None).unwrap(), "none");
}

#[test]
fn time_of_day_accepts_both_clock_styles() {
    assert_eq!(TimeOfDay::parse("14:30").unwrap(), TimeOfDay::parse("2:30 pm").unwrap());
    assert!(TimeOfDay::parse("25:00").is_err());
}
