//! Task store layer.
//!
//! # Responsibility
//! - Define the task CRUD contract used by the view.
//! - Keep collection and id details out of view orchestration.
//!
//! # Invariants
//! - Updates against an unknown id return `NotFound` and change nothing.
//! - Removing an unknown id is a silent no-op.

pub mod task_repo;

pub use task_repo::{
    InMemoryTaskRepository, StoreError, StoreResult, TaskIdGenerator, TaskRepository,
};
