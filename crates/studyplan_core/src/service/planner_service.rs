//! Study planner use-case service.
//!
//! # Responsibility
//! - Accept user intents (toggle, add, edit, drop, day change) as method calls.
//! - Run every mutation through one fixed pipeline:
//!   mutate -> cascade -> rebuild buckets -> mirror task days -> recompute progress.
//! - Publish the resulting state to registered observers.
//!
//! # Invariants
//! - State is replaced only after the whole pipeline succeeds.
//! - Unknown ids never raise; they yield `MutationOutcome::Unchanged` and no publish.
//! - `Task::day` always equals the day of the bucket holding the task.

use crate::cascade::{apply_topic_edit, apply_topic_priority_change};
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, PlannerConfig, StudyGoals};
use crate::model::day::DayIndex;
use crate::model::priority::Priority;
use crate::model::task::{NoteId, NoteKind, Task, TaskDraft, TaskId, TaskNote};
use crate::model::topic::{find_by_name, Topic, TopicDraft, TopicId};
use crate::progress::recompute_progress;
use crate::schedule::buckets::DayBuckets;
use crate::schedule::reorder::{handle_drop, DayChange, DropTarget};
use crate::service::stats::{study_stats, StudyStats};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Draft validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Task title is blank after trim.
    BlankTitle,
    /// Topic name is blank after trim.
    BlankTopicName,
    /// Task draft names a topic that does not exist.
    UnknownTopic(String),
    /// Note content is blank after trim.
    BlankNote,
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
            Self::BlankTopicName => write!(f, "topic name must not be blank"),
            Self::UnknownTopic(name) => write!(f, "topic not found: `{name}`"),
            Self::BlankNote => write!(f, "note content must not be blank"),
        }
    }
}

impl Error for DraftError {}

/// Errors from planner service operations.
#[derive(Debug)]
pub enum PlannerError {
    Draft(DraftError),
    Config(ConfigError),
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlannerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Draft(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<DraftError> for PlannerError {
    fn from(value: DraftError) -> Self {
        Self::Draft(value)
    }
}

impl From<ConfigError> for PlannerError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Whether an intent changed published state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    /// Target missing or intent had no effect; prior state kept.
    Unchanged,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Task list filter by topic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicFilter {
    All,
    Named(String),
}

impl TopicFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => task.topic == *name,
        }
    }
}

/// Published planner state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerSnapshot {
    pub tasks: Vec<Task>,
    pub topics: Vec<Topic>,
    /// Monday bucket first, each bucket in its own order.
    pub ordered_tasks: Vec<Task>,
}

/// Receiver of published planner state.
pub trait PlannerObserver {
    /// Called after every applied mutation.
    fn on_published(&self, snapshot: &PlannerSnapshot);

    /// Called when a task moves to another day bucket.
    fn on_day_changed(&self, _task_id: TaskId, _day: DayIndex) {}
}

/// In-memory planner session.
pub struct PlannerService<C: Clock = SystemClock> {
    clock: C,
    config: PlannerConfig,
    session_day: DayIndex,
    topics: Vec<Topic>,
    tasks: Vec<Task>,
    buckets: DayBuckets,
    observers: Vec<Box<dyn PlannerObserver>>,
}

impl<C: Clock> PlannerService<C> {
    /// Creates a session seeded with topics and tasks.
    ///
    /// Buckets are seeded from each task's `day` (Monday when absent), and
    /// topic progress is derived immediately.
    pub fn new(
        config: PlannerConfig,
        clock: C,
        topics: Vec<Topic>,
        tasks: Vec<Task>,
    ) -> Result<Self, PlannerError> {
        config.validate()?;
        let session_day = DayIndex::from_date(clock.today());
        let buckets = DayBuckets::from_tasks(&tasks);
        let tasks = mirror_days(tasks, &buckets);
        let topics = recompute_progress(&tasks, &topics);
        info!(
            "event=planner_init module=planner status=ok topics={} tasks={} session_day={}",
            topics.len(),
            tasks.len(),
            session_day.value()
        );
        Ok(Self {
            clock,
            config,
            session_day,
            topics,
            tasks,
            buckets,
            observers: Vec::new(),
        })
    }

    /// Registers a state observer.
    pub fn subscribe(&mut self, observer: Box<dyn PlannerObserver>) {
        self.observers.push(observer);
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn buckets(&self) -> &DayBuckets {
        &self.buckets
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Monday-based day of the session start; the default selected day.
    pub fn session_day(&self) -> DayIndex {
        self.session_day
    }

    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    pub fn topic(&self, topic_id: TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id == topic_id)
    }

    /// All tasks in day order.
    pub fn ordered_tasks(&self) -> Vec<&Task> {
        self.buckets.ordered_tasks(&self.tasks)
    }

    pub fn tasks_for_day(&self, day: DayIndex) -> Vec<&Task> {
        self.buckets.tasks_for_day(day, &self.tasks)
    }

    /// Tasks matching `filter`, in day order.
    pub fn filter_tasks(&self, filter: &TopicFilter) -> Vec<&Task> {
        self.ordered_tasks()
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect()
    }

    pub fn snapshot(&self) -> PlannerSnapshot {
        PlannerSnapshot {
            tasks: self.tasks.clone(),
            topics: self.topics.clone(),
            ordered_tasks: self.ordered_tasks().into_iter().cloned().collect(),
        }
    }

    /// Study statistics for `day`.
    pub fn stats(&self, day: DayIndex) -> StudyStats {
        study_stats(
            &self.tasks,
            &self.topics,
            &self.buckets,
            self.config.goals(),
            day,
        )
    }

    /// Flips one task's completion flag.
    pub fn toggle_task_completion(&mut self, task_id: TaskId) -> MutationOutcome {
        let Some(tasks) = replace_task(&self.tasks, task_id, |task| {
            task.completed = !task.completed;
        }) else {
            return self.noop("task_toggle", task_id);
        };
        self.commit("task_toggle", self.topics.clone(), tasks, self.buckets.clone(), None);
        MutationOutcome::Applied
    }

    /// Validates and schedules a new task.
    ///
    /// The task inherits its topic's priority and lands at the end of
    /// `draft.day` (Monday when absent).
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<TaskId, PlannerError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(DraftError::BlankTitle.into());
        }
        let topic_name = draft.topic.trim();
        if topic_name.is_empty() {
            return Err(DraftError::BlankTopicName.into());
        }
        let topic = find_by_name(&self.topics, topic_name)
            .ok_or_else(|| DraftError::UnknownTopic(topic_name.to_string()))?;

        let mut task = Task::new(title, topic_name, draft.start_time, draft.end_time)
            .with_priority(topic.priority);
        task.day = draft.day;
        task.color = draft.color;
        task.details = draft.details;
        task.reminder_minutes_before = draft.reminder_minutes_before;
        let task_id = task.id;

        let mut tasks = self.tasks.clone();
        tasks.push(task);
        self.commit("task_add", self.topics.clone(), tasks, self.buckets.clone(), None);
        Ok(task_id)
    }

    /// Replaces one task record by id.
    ///
    /// A changed `day` moves the task to the end of that day's bucket; a `None`
    /// day keeps the current bucket.
    pub fn update_task(&mut self, task: Task) -> MutationOutcome {
        let task_id = task.id;
        let Some(current_day) = self.buckets.day_of(task_id) else {
            return self.noop("task_update", task_id);
        };
        let Some(tasks) = replace_task(&self.tasks, task_id, |slot| *slot = task.clone()) else {
            return self.noop("task_update", task_id);
        };

        let mut day_change = None;
        let mut buckets = self.buckets.clone();
        if let Some(day) = task.day.filter(|day| *day != current_day) {
            if let Some(moved) = self.buckets.move_to_day(task_id, day) {
                buckets = moved;
                day_change = Some(DayChange {
                    task_id,
                    from: current_day,
                    to: day,
                });
            }
        }
        self.commit("task_update", self.topics.clone(), tasks, buckets, day_change);
        MutationOutcome::Applied
    }

    /// Removes one task and its bucket entry.
    pub fn delete_task(&mut self, task_id: TaskId) -> MutationOutcome {
        let Some(buckets) = self.buckets.remove(task_id) else {
            return self.noop("task_delete", task_id);
        };
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id != task_id)
            .cloned()
            .collect();
        self.commit("task_delete", self.topics.clone(), tasks, buckets, None);
        MutationOutcome::Applied
    }

    /// Replaces the topic list, cascading renames and priority edits to tasks.
    pub fn change_topics(&mut self, new_topics: Vec<Topic>) -> MutationOutcome {
        if same_topics_ignoring_progress(&new_topics, &self.topics) {
            debug!("event=topics_change module=planner status=noop reason=identical");
            return MutationOutcome::Unchanged;
        }
        let (topics, tasks) = apply_topic_edit(&self.topics, &new_topics, &self.tasks);
        self.commit("topics_change", topics, tasks, self.buckets.clone(), None);
        MutationOutcome::Applied
    }

    /// Validates and appends a new topic.
    pub fn create_topic(&mut self, draft: TopicDraft) -> Result<TopicId, PlannerError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(DraftError::BlankTopicName.into());
        }
        let priority = draft
            .priority
            .unwrap_or(self.config.default_topic_priority);
        let mut topic = Topic::new(name, draft.color, priority);
        topic.description = draft
            .description
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        let topic_id = topic.id;

        let mut topics = self.topics.clone();
        topics.push(topic);
        self.change_topics(topics);
        Ok(topic_id)
    }

    /// Removes one topic. Tasks keep the stale topic name.
    pub fn delete_topic(&mut self, topic_id: TopicId) -> MutationOutcome {
        if self.topic(topic_id).is_none() {
            return self.noop("topic_delete", topic_id);
        }
        let topics = self
            .topics
            .iter()
            .filter(|topic| topic.id != topic_id)
            .cloned()
            .collect();
        self.change_topics(topics)
    }

    /// Sets one topic's priority and overwrites it on all its tasks.
    pub fn change_topic_priority(
        &mut self,
        topic_id: TopicId,
        priority: Priority,
    ) -> MutationOutcome {
        if self.topic(topic_id).is_none() {
            return self.noop("topic_priority_change", topic_id);
        }
        let (topics, tasks) =
            apply_topic_priority_change(&self.topics, &self.tasks, topic_id, priority);
        self.commit(
            "topic_priority_change",
            topics,
            tasks,
            self.buckets.clone(),
            None,
        );
        MutationOutcome::Applied
    }

    /// Sets one task's own priority.
    pub fn change_task_priority(&mut self, task_id: TaskId, priority: Priority) -> MutationOutcome {
        let Some(tasks) = replace_task(&self.tasks, task_id, |task| task.priority = priority)
        else {
            return self.noop("task_priority_change", task_id);
        };
        self.commit(
            "task_priority_change",
            self.topics.clone(),
            tasks,
            self.buckets.clone(),
            None,
        );
        MutationOutcome::Applied
    }

    /// Applies a drag-and-drop gesture.
    pub fn reorder_drop(&mut self, active_id: TaskId, target: DropTarget) -> MutationOutcome {
        let result = handle_drop(&self.buckets, active_id, target);
        if !result.applied {
            return self.noop("reorder_drop", active_id);
        }
        self.commit(
            "reorder_drop",
            self.topics.clone(),
            self.tasks.clone(),
            result.buckets,
            result.day_change,
        );
        MutationOutcome::Applied
    }

    /// Moves one task to the end of another day.
    pub fn change_task_day(&mut self, task_id: TaskId, day: DayIndex) -> MutationOutcome {
        let Some(from) = self.buckets.day_of(task_id) else {
            return self.noop("task_day_change", task_id);
        };
        let Some(buckets) = self.buckets.move_to_day(task_id, day) else {
            return self.noop("task_day_change", task_id);
        };
        self.commit(
            "task_day_change",
            self.topics.clone(),
            self.tasks.clone(),
            buckets,
            Some(DayChange {
                task_id,
                from,
                to: day,
            }),
        );
        MutationOutcome::Applied
    }

    /// Attaches a text note to a task, newest first.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    pub fn add_task_note(
        &mut self,
        task_id: TaskId,
        content: impl Into<String>,
    ) -> Result<Option<NoteId>, PlannerError> {
        let content = content.into();
        let content = content.trim();
        if content.is_empty() {
            return Err(DraftError::BlankNote.into());
        }
        let note = TaskNote {
            id: Uuid::new_v4(),
            content: content.to_string(),
            created_at_ms: self.clock.now_epoch_ms(),
            kind: NoteKind::Text,
        };
        let note_id = note.id;
        let Some(tasks) = replace_task(&self.tasks, task_id, |task| {
            task.notes.insert(0, note.clone());
        }) else {
            self.noop("task_note_add", task_id);
            return Ok(None);
        };
        self.commit(
            "task_note_add",
            self.topics.clone(),
            tasks,
            self.buckets.clone(),
            None,
        );
        Ok(Some(note_id))
    }

    /// Removes one note from a task.
    pub fn delete_task_note(&mut self, task_id: TaskId, note_id: NoteId) -> MutationOutcome {
        let has_note = self
            .task(task_id)
            .is_some_and(|task| task.notes.iter().any(|note| note.id == note_id));
        if !has_note {
            return self.noop("task_note_delete", task_id);
        }
        let Some(tasks) = replace_task(&self.tasks, task_id, |task| {
            task.notes.retain(|note| note.id != note_id);
        }) else {
            return self.noop("task_note_delete", task_id);
        };
        self.commit(
            "task_note_delete",
            self.topics.clone(),
            tasks,
            self.buckets.clone(),
            None,
        );
        MutationOutcome::Applied
    }

    /// Replaces study goals after validation.
    pub fn update_goals(
        &mut self,
        daily_hours: f64,
        weekly_hours: f64,
    ) -> Result<(), PlannerError> {
        let goals = StudyGoals::new(daily_hours, weekly_hours)?;
        self.config.daily_goal_hours = goals.daily_hours;
        self.config.weekly_goal_hours = goals.weekly_hours;
        info!("event=goals_update module=planner status=ok");
        Ok(())
    }

    fn noop(&self, event: &'static str, id: Uuid) -> MutationOutcome {
        debug!("event={event} module=planner status=noop id={id}");
        MutationOutcome::Unchanged
    }

    /// Runs the derivation pipeline on candidate state, then swaps it in and
    /// publishes.
    fn commit(
        &mut self,
        event: &'static str,
        topics: Vec<Topic>,
        tasks: Vec<Task>,
        buckets: DayBuckets,
        day_change: Option<DayChange>,
    ) {
        let buckets = buckets.rebuild_from_tasks(&tasks);
        let tasks = mirror_days(tasks, &buckets);
        let topics = recompute_progress(&tasks, &topics);

        self.topics = topics;
        self.tasks = tasks;
        self.buckets = buckets;
        info!(
            "event={event} module=planner status=ok tasks={} topics={}",
            self.tasks.len(),
            self.topics.len()
        );

        if let Some(change) = day_change {
            for observer in &self.observers {
                observer.on_day_changed(change.task_id, change.to);
            }
        }
        if !self.observers.is_empty() {
            let snapshot = self.snapshot();
            for observer in &self.observers {
                observer.on_published(&snapshot);
            }
        }
    }
}

/// Copies `tasks` with one task edited; `None` when the id is unknown.
fn replace_task(
    tasks: &[Task],
    task_id: TaskId,
    edit: impl FnOnce(&mut Task),
) -> Option<Vec<Task>> {
    let index = tasks.iter().position(|task| task.id == task_id)?;
    let mut next = tasks.to_vec();
    edit(&mut next[index]);
    Some(next)
}

/// Topic lists equal in everything but derived progress.
fn same_topics_ignoring_progress(left: &[Topic], right: &[Topic]) -> bool {
    left.len() == right.len()
        && left.iter().zip(right).all(|(a, b)| {
            a.id == b.id
                && a.name == b.name
                && a.color == b.color
                && a.priority == b.priority
                && a.description == b.description
        })
}

/// Sets each task's `day` to the bucket that holds it.
fn mirror_days(tasks: Vec<Task>, buckets: &DayBuckets) -> Vec<Task> {
    let days = buckets.day_lookup();
    tasks
        .into_iter()
        .map(|mut task| {
            if let Some(day) = days.get(&task.id) {
                task.day = Some(*day);
            }
            task
        })
        .collect()
}
