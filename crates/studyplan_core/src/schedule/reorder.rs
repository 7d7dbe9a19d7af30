//! Drag-and-drop interpretation over day buckets.
//!
//! # Responsibility
//! - Turn one drop gesture into either a same-day reorder or a cross-day move.
//!
//! # Invariants
//! - Invalid drops (unknown source or target, same position) return the input
//!   buckets unchanged and report no day change.
//! - The result is computed on a copy and returned whole.
//! - A day change is reported only when source and destination days differ.

use crate::model::day::DayIndex;
use crate::model::task::TaskId;
use crate::schedule::buckets::DayBuckets;
use log::debug;

/// Where a dragged task was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The day column itself (empty area / bucket-level drop zone).
    Day(DayIndex),
    /// Another task card.
    Task(TaskId),
}

/// Cross-day move notification payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayChange {
    pub task_id: TaskId,
    pub from: DayIndex,
    pub to: DayIndex,
}

/// Result of interpreting one drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResult {
    pub buckets: DayBuckets,
    /// Set only for applied cross-day moves.
    pub day_change: Option<DayChange>,
    /// Whether `buckets` differs from the input.
    pub applied: bool,
}

impl DropResult {
    fn unchanged(buckets: &DayBuckets) -> Self {
        Self {
            buckets: buckets.clone(),
            day_change: None,
            applied: false,
        }
    }
}

/// Applies a drop of `active_id` onto `target`.
pub fn handle_drop(buckets: &DayBuckets, active_id: TaskId, target: DropTarget) -> DropResult {
    let Some((source_day, old_index)) = buckets.locate(active_id) else {
        debug!("event=task_drop module=schedule status=noop reason=source_not_found task_id={active_id}");
        return DropResult::unchanged(buckets);
    };

    let (target_day, target_index) = match target {
        DropTarget::Day(day) => (day, None),
        DropTarget::Task(target_id) => match buckets.locate(target_id) {
            Some((day, index)) => (day, Some(index)),
            None => {
                debug!(
                    "event=task_drop module=schedule status=noop reason=target_not_found task_id={active_id} target_id={target_id}"
                );
                return DropResult::unchanged(buckets);
            }
        },
    };

    if source_day == target_day {
        let last_index = buckets.bucket(source_day).len() - 1;
        let new_index = target_index.unwrap_or(last_index);
        if old_index == new_index {
            return DropResult::unchanged(buckets);
        }

        let mut next = buckets.clone();
        let bucket = next.bucket_mut(source_day);
        let moved = bucket.remove(old_index);
        bucket.insert(new_index, moved);

        debug!(
            "event=task_drop module=schedule status=ok kind=reorder task_id={active_id} day={} from={old_index} to={new_index}",
            source_day.value()
        );
        return DropResult {
            buckets: next,
            day_change: None,
            applied: true,
        };
    }

    let mut next = buckets.clone();
    next.bucket_mut(source_day).remove(old_index);
    let destination = next.bucket_mut(target_day);
    let insert_index = target_index.unwrap_or(destination.len());
    destination.insert(insert_index, active_id);

    debug!(
        "event=task_drop module=schedule status=ok kind=move task_id={active_id} from_day={} to_day={} index={insert_index}",
        source_day.value(),
        target_day.value()
    );
    DropResult {
        buckets: next,
        day_change: Some(DayChange {
            task_id: active_id,
            from: source_day,
            to: target_day,
        }),
        applied: true,
    }
}
