use studyplan_core::{ConfigError, PlannerConfig, Priority, StudyGoals};

#[test]
fn empty_json_yields_defaults() {
    let config = PlannerConfig::from_json_str("{}").unwrap();

    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.goals(), StudyGoals::default());
    assert_eq!(config.default_topic_priority, Priority::None);
}

#[test]
fn json_fields_override_defaults() {
    let config = PlannerConfig::from_json_str(
        r#"{
            "daily_goal_hours": 2.5,
            "weekly_goal_hours": 12,
            "default_topic_priority": "medium",
            "log_level": "Warning"
        }"#,
    )
    .unwrap();

    assert_eq!(config.daily_goal_hours, 2.5);
    assert_eq!(config.weekly_goal_hours, 12.0);
    assert_eq!(config.default_topic_priority, Priority::Medium);
    assert_eq!(config.log_level.as_deref(), Some("Warning"));
}

#[test]
fn invalid_goals_are_rejected() {
    let err = PlannerConfig::from_json_str(r#"{"daily_goal_hours": -1}"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidGoal {
            field: "daily_goal_hours",
            ..
        }
    ));

    let err = PlannerConfig::from_json_str(r#"{"daily_goal_hours": 30, "weekly_goal_hours": 60}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::DailyGoalTooLarge(_)));

    let err = StudyGoals::new(6.0, 4.0).unwrap_err();
    assert!(matches!(err, ConfigError::WeeklyBelowDaily { .. }));
    assert!(StudyGoals::new(f64::NAN, 4.0).is_err());
}

#[test]
fn unknown_log_level_and_malformed_json_are_rejected() {
    let err = PlannerConfig::from_json_str(r#"{"log_level": "chatty"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    assert!(err.to_string().contains("chatty"));

    let err = PlannerConfig::from_json_str(r#"{"default_topic_priority": "urgent"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = PlannerConfig::from_json_str("not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
