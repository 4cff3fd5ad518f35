//! Domain model for the tasks view.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, validator and view.
//!
//! # Invariants
//! - Every task is identified by a store-assigned `TaskId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod task;
