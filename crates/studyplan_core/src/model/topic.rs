//! Topic domain model.
//!
//! # Responsibility
//! - Define the study topic record that tasks reference by name.
//!
//! # Invariants
//! - `id` is stable and never reused for another topic.
//! - `progress` is derived by `progress::recompute_progress` and stays in `0..=100`.
//! - `name` is not unique by invariant; tasks match topics by exact name.

use crate::model::color::ColorRef;
use crate::model::priority::Priority;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one topic.
pub type TopicId = Uuid;

/// Study topic grouping tasks by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    /// Display label; tasks hold this exact string as their topic reference.
    pub name: String,
    pub color: ColorRef,
    /// Completion percentage. Only written by the progress calculator.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub description: Option<String>,
}

impl Topic {
    /// Creates a topic with a generated stable ID and zero progress.
    pub fn new(name: impl Into<String>, color: ColorRef, priority: Priority) -> Self {
        Self::with_id(Uuid::new_v4(), name, color, priority)
    }

    /// Creates a topic with a caller-provided stable ID.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(
        id: TopicId,
        name: impl Into<String>,
        color: ColorRef,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            progress: 0,
            priority,
            description: None,
        }
    }
}

/// Caller input for creating a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDraft {
    pub name: String,
    pub color: ColorRef,
    /// Falls back to the configured default when `None`.
    pub priority: Option<Priority>,
    pub description: Option<String>,
}

impl TopicDraft {
    pub fn new(name: impl Into<String>, color: ColorRef) -> Self {
        Self {
            name: name.into(),
            color,
            priority: None,
            description: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Finds the first topic whose name equals `name` exactly.
pub fn find_by_name<'a>(topics: &'a [Topic], name: &str) -> Option<&'a Topic> {
    topics.iter().find(|topic| topic.name == name)
}
