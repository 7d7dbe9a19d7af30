//! Core domain logic for the study planner.
//! This crate is the single source of truth for topic/task invariants and
//! weekly ordering.

pub mod cascade;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod progress;
pub mod schedule;
pub mod service;

pub use cascade::{apply_topic_edit, apply_topic_priority_change, TopicDelta};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, PlannerConfig, StudyGoals};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::color::{ColorError, ColorRef, STUDY_PALETTE};
pub use model::day::{DayIndex, DayIndexError, DAYS_IN_WEEK};
pub use model::priority::{Priority, PriorityParseError};
pub use model::task::{NoteId, NoteKind, Task, TaskDraft, TaskId, TaskNote};
pub use model::time::{TimeOfDay, TimeParseError};
pub use model::topic::{Topic, TopicDraft, TopicId};
pub use progress::{recompute_progress, CompletionCount};
pub use schedule::buckets::DayBuckets;
pub use schedule::reorder::{handle_drop, DayChange, DropResult, DropTarget};
pub use service::planner_service::{
    DraftError, MutationOutcome, PlannerError, PlannerObserver, PlannerService, PlannerSnapshot,
    TopicFilter,
};
pub use service::stats::{study_stats, StudyStats, TopicProgress};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
