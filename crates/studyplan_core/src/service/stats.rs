//! Study statistics projection.
//!
//! # Invariants
//! - All percentages are in `0..=100`; goal percentages are capped at 100.
//! - Studied time only counts completed tasks with a usable time window.

use crate::config::StudyGoals;
use crate::model::day::DayIndex;
use crate::model::task::Task;
use crate::model::topic::{Topic, TopicId};
use crate::progress::{count_by_topic, overall_completion};
use crate::schedule::buckets::DayBuckets;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Progress row for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicProgress {
    pub topic_id: TopicId,
    pub name: String,
    pub progress: u8,
    pub completed_tasks: usize,
    pub total_tasks: usize,
}

/// Aggregate study statistics for one selected day and its week.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyStats {
    pub day: DayIndex,
    pub minutes_studied_on_day: u32,
    pub minutes_studied_in_week: u32,
    pub goals: StudyGoals,
    pub daily_goal_percent: u8,
    pub weekly_goal_percent: u8,
    /// Completion over every task in the plan.
    pub overall_completion: u8,
    pub topics: Vec<TopicProgress>,
}

impl StudyStats {
    pub fn hours_studied_on_day(&self) -> f64 {
        f64::from(self.minutes_studied_on_day) / MINUTES_PER_HOUR
    }

    pub fn hours_studied_in_week(&self) -> f64 {
        f64::from(self.minutes_studied_in_week) / MINUTES_PER_HOUR
    }

    /// Hours left to reach the daily goal, never negative.
    pub fn daily_hours_remaining(&self) -> f64 {
        (self.goals.daily_hours - self.hours_studied_on_day()).max(0.0)
    }
}

/// Builds statistics for `day` from the current plan state.
pub fn study_stats(
    tasks: &[Task],
    topics: &[Topic],
    buckets: &DayBuckets,
    goals: StudyGoals,
    day: DayIndex,
) -> StudyStats {
    let minutes_studied_on_day = completed_minutes(buckets.tasks_for_day(day, tasks));
    let minutes_studied_in_week = completed_minutes(buckets.ordered_tasks(tasks));

    let counts = count_by_topic(tasks);
    let topic_rows = topics
        .iter()
        .map(|topic| {
            let count = counts
                .get(topic.name.as_str())
                .copied()
                .unwrap_or_default();
            TopicProgress {
                topic_id: topic.id,
                name: topic.name.clone(),
                progress: count.percent(),
                completed_tasks: count.completed,
                total_tasks: count.total,
            }
        })
        .collect();

    StudyStats {
        day,
        minutes_studied_on_day,
        minutes_studied_in_week,
        goals,
        daily_goal_percent: goal_percent(minutes_studied_on_day, goals.daily_hours),
        weekly_goal_percent: goal_percent(minutes_studied_in_week, goals.weekly_hours),
        overall_completion: overall_completion(tasks),
        topics: topic_rows,
    }
}

fn completed_minutes<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> u32 {
    tasks
        .into_iter()
        .filter(|task| task.completed)
        .map(Task::duration_minutes)
        .sum()
}

fn goal_percent(minutes: u32, goal_hours: f64) -> u8 {
    let goal_minutes = goal_hours * MINUTES_PER_HOUR;
    if goal_minutes.is_nan() || goal_minutes <= 0.0 {
        return 0;
    }
    (f64::from(minutes) / goal_minutes * 100.0).round().min(100.0) as u8
}
