//! Form validation boundary.
//!
//! # Responsibility
//! - Reject invalid form payloads before they reach the task store.
//!
//! # Invariants
//! - Store writes accept only `ValidatedTaskInput`.
//! - Validation errors are returned to the form, never logged.

pub mod task_schema;

pub use task_schema::{
    FieldError, FormField, FormSchema, TaskFormInput, TaskSchema, ValidatedTaskInput,
    ValidationError,
};
