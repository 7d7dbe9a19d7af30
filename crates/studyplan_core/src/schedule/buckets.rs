//! Day-bucket ordering index.
//!
//! # Responsibility
//! - Own the relative order of tasks inside each day of the week.
//! - Reconcile bucket contents with the current task collection.
//!
//! # Invariants
//! - All seven days are always present (empty buckets allowed).
//! - Every task id appears in exactly one bucket, exactly once.
//! - Mutating helpers return a new value; `self` is never left half-updated.

use crate::model::day::{DayIndex, DAYS_IN_WEEK};
use crate::model::task::{Task, TaskId};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Ordered task ids for each day, Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayBuckets {
    days: [Vec<TaskId>; DAYS_IN_WEEK],
}

impl DayBuckets {
    /// Seeds buckets from scratch: explicit `day` wins, otherwise Monday.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self::default().rebuild_from_tasks(tasks)
    }

    /// Builds buckets directly from per-day id lists.
    ///
    /// Returns `None` when an id is repeated across or within days.
    pub fn from_days(days: [Vec<TaskId>; DAYS_IN_WEEK]) -> Option<Self> {
        let mut seen = HashSet::new();
        for id in days.iter().flatten() {
            if !seen.insert(*id) {
                return None;
            }
        }
        Some(Self { days })
    }

    /// Reconciles buckets with `tasks`.
    ///
    /// - Ids already placed keep their day and relative position.
    /// - Ids missing from `tasks` are dropped.
    /// - New ids are appended, in encounter order, to the day named by
    ///   `task.day`, or to Monday when the task carries no day.
    pub fn rebuild_from_tasks(&self, tasks: &[Task]) -> Self {
        let live: HashSet<TaskId> = tasks.iter().map(|task| task.id).collect();

        let mut placed = HashSet::new();
        let mut next = Self::default();
        for (day, ids) in self.days.iter().enumerate() {
            for id in ids {
                if live.contains(id) && placed.insert(*id) {
                    next.days[day].push(*id);
                }
            }
        }

        let mut seeded = 0usize;
        for task in tasks {
            if placed.insert(task.id) {
                let day = task.day.unwrap_or(DayIndex::MONDAY);
                next.days[day.as_usize()].push(task.id);
                seeded += 1;
            }
        }

        debug!(
            "event=buckets_rebuild module=schedule status=ok tasks={} seeded={}",
            tasks.len(),
            seeded
        );
        next
    }

    /// Ordered ids for one day.
    pub fn bucket(&self, day: DayIndex) -> &[TaskId] {
        &self.days[day.as_usize()]
    }

    /// Day whose bucket contains `task_id`.
    pub fn day_of(&self, task_id: TaskId) -> Option<DayIndex> {
        DayIndex::all().find(|day| self.bucket(*day).contains(&task_id))
    }

    /// Day of every scheduled task, built in one pass.
    pub fn day_lookup(&self) -> HashMap<TaskId, DayIndex> {
        DayIndex::all()
            .flat_map(|day| self.bucket(day).iter().map(move |id| (*id, day)))
            .collect()
    }

    /// `(day, position)` of `task_id`.
    pub fn locate(&self, task_id: TaskId) -> Option<(DayIndex, usize)> {
        DayIndex::all().find_map(|day| {
            self.bucket(day)
                .iter()
                .position(|id| *id == task_id)
                .map(|index| (day, index))
        })
    }

    pub fn contains(&self, task_id: TaskId) -> bool {
        self.locate(task_id).is_some()
    }

    /// Total ids across all buckets.
    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// All ids, Monday bucket first, each bucket in its own order.
    pub fn flatten(&self) -> Vec<TaskId> {
        self.days.iter().flatten().copied().collect()
    }

    /// Resolves the flattened order against a task collection.
    ///
    /// Ids without a matching task are skipped.
    pub fn ordered_tasks<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let by_id: HashMap<TaskId, &Task> = tasks.iter().map(|task| (task.id, task)).collect();
        self.days
            .iter()
            .flatten()
            .filter_map(|id| by_id.get(id).copied())
            .collect()
    }

    /// Resolves one day's bucket against a task collection.
    pub fn tasks_for_day<'a>(&self, day: DayIndex, tasks: &'a [Task]) -> Vec<&'a Task> {
        let by_id: HashMap<TaskId, &Task> = tasks.iter().map(|task| (task.id, task)).collect();
        self.bucket(day)
            .iter()
            .filter_map(|id| by_id.get(id).copied())
            .collect()
    }

    /// Moves `task_id` to the end of `day`.
    ///
    /// Returns `None` when the id is unknown or already in that bucket.
    pub fn move_to_day(&self, task_id: TaskId, day: DayIndex) -> Option<Self> {
        let (current_day, index) = self.locate(task_id)?;
        if current_day == day {
            return None;
        }
        let mut next = self.clone();
        next.days[current_day.as_usize()].remove(index);
        next.days[day.as_usize()].push(task_id);
        Some(next)
    }

    /// Removes `task_id`. Returns `None` when the id is unknown.
    pub fn remove(&self, task_id: TaskId) -> Option<Self> {
        let (day, index) = self.locate(task_id)?;
        let mut next = self.clone();
        next.days[day.as_usize()].remove(index);
        Some(next)
    }

    pub(crate) fn bucket_mut(&mut self, day: DayIndex) -> &mut Vec<TaskId> {
        &mut self.days[day.as_usize()]
    }
}
