//! Topic edit propagation onto dependent tasks.
//!
//! # Responsibility
//! - Rewrite task topic references when topics are renamed.
//! - Overwrite task priorities when their topic priority changes.
//!
//! # Invariants
//! - Every function builds complete new collections; inputs are never
//!   partially rewritten, so no reader can observe half of a rename.
//! - Each task receives at most one rename substitution per pass, so
//!   simultaneous swaps (`A -> B`, `B -> A`) resolve correctly.
//! - Topic priority edits overwrite task priorities unconditionally
//!   (last writer wins).
//! - Tasks of removed topics keep their stale topic name.

use crate::model::priority::Priority;
use crate::model::task::Task;
use crate::model::topic::{Topic, TopicId};
use log::debug;
use std::collections::HashMap;

/// Name and priority deltas between two topic snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicDelta {
    /// `old name -> new name` for renamed topics.
    pub renames: HashMap<String, String>,
    /// `post-rename name -> new priority` for re-prioritized topics.
    pub priorities: HashMap<String, Priority>,
}

impl TopicDelta {
    /// Compares topics present in both snapshots by id.
    pub fn between(old_topics: &[Topic], new_topics: &[Topic]) -> Self {
        let old_by_id: HashMap<TopicId, &Topic> =
            old_topics.iter().map(|topic| (topic.id, topic)).collect();

        let mut delta = Self::default();
        for new_topic in new_topics {
            let Some(old_topic) = old_by_id.get(&new_topic.id) else {
                continue;
            };
            if old_topic.name != new_topic.name {
                delta
                    .renames
                    .insert(old_topic.name.clone(), new_topic.name.clone());
            }
            if old_topic.priority != new_topic.priority {
                delta
                    .priorities
                    .insert(new_topic.name.clone(), new_topic.priority);
            }
        }
        delta
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty() && self.priorities.is_empty()
    }

    /// Applies this delta to one task copy. Returns whether it changed.
    fn apply_to(&self, task: &mut Task) -> bool {
        let mut changed = false;
        if let Some(new_name) = self.renames.get(task.topic.as_str()) {
            task.topic = new_name.clone();
            changed = true;
        }
        if let Some(priority) = self.priorities.get(task.topic.as_str()) {
            if task.priority != *priority {
                task.priority = *priority;
                changed = true;
            }
        }
        changed
    }
}

/// Replaces the topic list and cascades renames/priority edits onto tasks.
///
/// Returns `(new_topics, rewritten_tasks)`. Topic progress is left as given;
/// callers recompute it afterwards.
pub fn apply_topic_edit(
    old_topics: &[Topic],
    new_topics: &[Topic],
    tasks: &[Task],
) -> (Vec<Topic>, Vec<Task>) {
    let delta = TopicDelta::between(old_topics, new_topics);
    if delta.is_empty() {
        return (new_topics.to_vec(), tasks.to_vec());
    }

    let mut touched = 0usize;
    let rewritten = tasks
        .iter()
        .map(|task| {
            let mut next = task.clone();
            if delta.apply_to(&mut next) {
                touched += 1;
            }
            next
        })
        .collect::<Vec<_>>();

    debug!(
        "event=topic_cascade module=cascade status=ok renames={} priority_changes={} tasks_touched={}",
        delta.renames.len(),
        delta.priorities.len(),
        touched
    );
    (new_topics.to_vec(), rewritten)
}

/// Sets one topic's priority and overwrites it on every task under that topic.
///
/// Task matching uses the topic's name as it was before the update. An unknown
/// `topic_id` returns unchanged copies.
pub fn apply_topic_priority_change(
    topics: &[Topic],
    tasks: &[Task],
    topic_id: TopicId,
    priority: Priority,
) -> (Vec<Topic>, Vec<Task>) {
    let Some(target) = topics.iter().find(|topic| topic.id == topic_id) else {
        debug!(
            "event=topic_priority_change module=cascade status=noop reason=topic_not_found topic_id={topic_id}"
        );
        return (topics.to_vec(), tasks.to_vec());
    };
    let topic_name = target.name.clone();

    let next_topics = topics
        .iter()
        .map(|topic| {
            let mut next = topic.clone();
            if next.id == topic_id {
                next.priority = priority;
            }
            next
        })
        .collect::<Vec<_>>();

    let mut touched = 0usize;
    let next_tasks = tasks
        .iter()
        .map(|task| {
            let mut next = task.clone();
            if next.topic == topic_name {
                next.priority = priority;
                touched += 1;
            }
            next
        })
        .collect::<Vec<_>>();

    debug!(
        "event=topic_priority_change module=cascade status=ok topic_id={topic_id} priority={priority} tasks_touched={touched}"
    );
    (next_topics, next_tasks)
}
