//! Tasks view: modal state machine, controller and render snapshot.
//!
//! # Responsibility
//! - Keep UI-facing state in one explicit value instead of ambient globals.
//! - Derive the rendered list and dialogs purely from that value.
//!
//! # Invariants
//! - Modal state is `Closed`, `AddOpen` or `EditOpen(id)`, never two at once.

pub mod error;
pub mod modal;
pub mod tasks_view;
pub mod view_model;

pub use error::{ViewError, ViewResult};
pub use modal::{ModalKind, ModalState};
pub use tasks_view::{SubmitOutcome, TasksView};
pub use view_model::{ModalViewModel, TaskRow, TasksViewModel};
