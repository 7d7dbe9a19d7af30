//! Topic progress derivation.
//!
//! # Responsibility
//! - Project task completion onto each topic's `progress` percentage.
//!
//! # Invariants
//! - Pure: inputs are never mutated, output depends only on inputs.
//! - Every resulting `progress` is in `0..=100`; topics without tasks get 0.
//! - Rounding is half-up, matching `round(100 * completed / total)`.

use crate::model::task::Task;
use crate::model::topic::Topic;
use log::debug;
use std::collections::HashMap;

/// Completed/total counts for one topic name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionCount {
    pub completed: usize,
    pub total: usize,
}

impl CompletionCount {
    /// Rounded completion percentage; 0 when `total == 0`.
    pub fn percent(self) -> u8 {
        rounded_percent(self.completed, self.total)
    }
}

/// Returns topics with `progress` recomputed from `tasks`.
///
/// Tasks are grouped by exact `topic` name. Tasks naming a missing topic are
/// ignored; topics with no tasks settle at 0.
pub fn recompute_progress(tasks: &[Task], topics: &[Topic]) -> Vec<Topic> {
    let counts = count_by_topic(tasks);
    let recomputed = topics
        .iter()
        .map(|topic| {
            let mut next = topic.clone();
            next.progress = counts
                .get(topic.name.as_str())
                .copied()
                .unwrap_or_default()
                .percent();
            next
        })
        .collect::<Vec<_>>();
    debug!(
        "event=progress_recompute module=progress status=ok topics={} tasks={}",
        recomputed.len(),
        tasks.len()
    );
    recomputed
}

/// Groups tasks by topic name.
pub fn count_by_topic(tasks: &[Task]) -> HashMap<&str, CompletionCount> {
    let mut counts: HashMap<&str, CompletionCount> = HashMap::new();
    for task in tasks {
        let entry = counts.entry(task.topic.as_str()).or_default();
        entry.total += 1;
        if task.completed {
            entry.completed += 1;
        }
    }
    counts
}

/// Completion percentage over an arbitrary task slice.
pub fn overall_completion(tasks: &[Task]) -> u8 {
    let completed = tasks.iter().filter(|task| task.completed).count();
    rounded_percent(completed, tasks.len())
}

pub(crate) fn rounded_percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let part = part.min(total) as u64;
    let total = total as u64;
    // (200p + t) / 2t == floor(100p/t + 0.5)
    ((200 * part + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::rounded_percent;

    #[test]
    fn rounds_half_up() {
        assert_eq!(rounded_percent(1, 8), 13);
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(2, 3), 67);
        assert_eq!(rounded_percent(1, 200), 1);
    }

    #[test]
    fn empty_total_is_zero_and_full_is_hundred() {
        assert_eq!(rounded_percent(0, 0), 0);
        assert_eq!(rounded_percent(5, 5), 100);
    }
}
