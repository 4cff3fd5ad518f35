//! Core logic for the Taskboard tasks view.
//! This crate owns every task invariant; UI shells only render its snapshots.

pub mod format;
pub mod logging;
pub mod model;
pub mod notify;
pub mod store;
pub mod validation;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId};
pub use notify::{Notification, NotificationQueue, Notifier};
pub use store::{
    InMemoryTaskRepository, StoreError, StoreResult, TaskIdGenerator, TaskRepository,
};
pub use validation::{
    FieldError, FormField, FormSchema, TaskFormInput, TaskSchema, ValidatedTaskInput,
    ValidationError,
};
pub use view::{
    ModalKind, ModalState, ModalViewModel, SubmitOutcome, TaskRow, TasksView, TasksViewModel,
    ViewError, ViewResult,
};

/// Health-check probe for shell integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
