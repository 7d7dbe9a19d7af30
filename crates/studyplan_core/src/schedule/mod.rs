//! Weekly schedule ordering.
//!
//! # Responsibility
//! - Keep per-day task order (`buckets`).
//! - Interpret drag-and-drop gestures into bucket mutations (`reorder`).
//!
//! # Invariants
//! - Bucket order is the only source of relative order within a day.

pub mod buckets;
pub mod reorder;
