//! Task domain model.
//!
//! # Responsibility
//! - Define the schedulable study task and its attached notes.
//! - Resolve presentation fallbacks (effective color) from topic data.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `topic` is a weak, name-based reference; it may dangle after topic deletion.
//! - `day`, when set, mirrors the day bucket that holds this task.

use crate::model::color::ColorRef;
use crate::model::day::DayIndex;
use crate::model::priority::Priority;
use crate::model::time::span_minutes;
use crate::model::topic::{find_by_name, Topic};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one task.
pub type TaskId = Uuid;
/// Stable identifier for one task note.
pub type NoteId = Uuid;

/// Note body kind. Only text notes are kept by core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Text,
}

/// Free-form note attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNote {
    pub id: NoteId,
    pub content: String,
    /// Unix epoch milliseconds.
    pub created_at_ms: i64,
    pub kind: NoteKind,
}

/// Scheduled study task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Name of the owning topic (matched against `Topic::name`).
    pub topic: String,
    pub start_time: String,
    pub end_time: String,
    /// Which day bucket holds the task; `None` seeds into Monday.
    #[serde(default)]
    pub day: Option<DayIndex>,
    #[serde(default)]
    pub completed: bool,
    /// Overrides the topic color when set.
    #[serde(default)]
    pub color: Option<ColorRef>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub reminder_minutes_before: Option<u32>,
    /// Newest first.
    #[serde(default)]
    pub notes: Vec<TaskNote>,
}

impl Task {
    /// Creates an incomplete task with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        topic: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, topic, start_time, end_time)
    }

    /// Creates an incomplete task with a caller-provided stable ID.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        topic: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            topic: topic.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            day: None,
            completed: false,
            color: None,
            priority: Priority::None,
            details: None,
            reminder_minutes_before: None,
            notes: Vec::new(),
        }
    }

    pub fn on_day(mut self, day: DayIndex) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Scheduled length in minutes, 0 when the time window is not usable.
    pub fn duration_minutes(&self) -> u32 {
        span_minutes(self.start_time.as_str(), self.end_time.as_str())
    }

    /// Task color override, else the color of the topic named by `topic`.
    pub fn effective_color<'a>(&'a self, topics: &'a [Topic]) -> Option<&'a ColorRef> {
        self.color
            .as_ref()
            .or_else(|| find_by_name(topics, self.topic.as_str()).map(|topic| &topic.color))
    }
}

/// Caller input for scheduling a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    /// Must name an existing topic.
    pub topic: String,
    pub start_time: String,
    pub end_time: String,
    pub day: Option<DayIndex>,
    pub color: Option<ColorRef>,
    pub details: Option<String>,
    pub reminder_minutes_before: Option<u32>,
}

impl TaskDraft {
    pub fn new(
        title: impl Into<String>,
        topic: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            topic: topic.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            day: None,
            color: None,
            details: None,
            reminder_minutes_before: None,
        }
    }

    pub fn on_day(mut self, day: DayIndex) -> Self {
        self.day = Some(day);
        self
    }
}
