//! Study planner domain model.
//!
//! # Responsibility
//! - Define topic and task records plus the value types they carry.
//!
//! # Invariants
//! - Every topic and task is identified by a stable UUID.
//! - Tasks reference topics by name, never by id.
//! - Topic progress is derived data and never user-set.

pub mod color;
pub mod day;
pub mod priority;
pub mod task;
pub mod time;
pub mod topic;
