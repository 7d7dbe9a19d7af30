//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, cascade, progress and schedule steps into user-intent APIs.
//! - Keep presentation layers decoupled from derivation details.

pub mod planner_service;
pub mod stats;
