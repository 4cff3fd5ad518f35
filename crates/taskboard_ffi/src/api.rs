//! FFI API for the Flutter tasks screen.
//!
//! # Responsibility
//! - Expose one opaque `TasksSession` per visible tasks screen.
//! - Flatten core results into plain envelopes Dart can read.
//!
//! # Invariants
//! - Exported functions never panic across the FFI boundary.
//! - Failures are reported as `ok = false` envelopes, never as errors.
//! - Session state is owned by the Dart handle; there is no global store.

use flutter_rust_bridge::frb;
use taskboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    FieldError, InMemoryTaskRepository, ModalKind, ModalViewModel, NotificationQueue,
    SubmitOutcome, TaskFormInput, TaskId, TaskRow, TasksView, ViewError,
};

/// Health-check probe.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Core crate version.
#[frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and an error message on failure.
#[frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Inline form error for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrorItem {
    /// `title|dueDate|priority`.
    pub field: String,
    pub message: String,
}

/// Result envelope for every session action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionActionResponse {
    pub ok: bool,
    /// Task created, updated or deleted by this action, when there is one.
    pub task_id: Option<u64>,
    /// Human-readable outcome for diagnostics.
    pub message: String,
    /// Non-empty only for a rejected submit.
    pub field_errors: Vec<FieldErrorItem>,
}

impl SessionActionResponse {
    fn success(message: impl Into<String>, task_id: Option<TaskId>) -> Self {
        Self {
            ok: true,
            task_id: task_id.map(TaskId::get),
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }
}

/// One task list row, labels already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRowItem {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub due_label: String,
    pub priority_label: String,
}

/// Open add/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalItem {
    /// `add|edit`.
    pub kind: String,
    /// "Add Task" or "Edit Task".
    pub heading: String,
    pub target_id: Option<u64>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub field_errors: Vec<FieldErrorItem>,
    /// `Low|Medium|High`, in picker order.
    pub priority_options: Vec<String>,
}

/// Whole-screen snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TasksRenderResponse {
    pub rows: Vec<TaskRowItem>,
    pub modal: Option<ModalItem>,
    pub empty: bool,
}

/// State of one tasks screen. Dropped with the Dart handle.
#[frb(opaque)]
pub struct TasksSession {
    view: TasksView<InMemoryTaskRepository, NotificationQueue>,
}

impl TasksSession {
    /// Creates an empty session.
    #[frb(sync)]
    pub fn new() -> Self {
        Self {
            view: TasksView::in_memory(),
        }
    }

    /// "Add Task" button.
    #[frb(sync)]
    pub fn open_add(&mut self) -> SessionActionResponse {
        match self.view.open_add() {
            Ok(()) => SessionActionResponse::success("Add form opened.", None),
            Err(err) => view_failure("open_add", err),
        }
    }

    /// "Edit" button on row `task_id`.
    #[frb(sync)]
    pub fn open_edit(&mut self, task_id: u64) -> SessionActionResponse {
        let id = TaskId::new(task_id);
        match self.view.open_edit(id) {
            Ok(()) => SessionActionResponse::success("Edit form opened.", Some(id)),
            Err(err) => view_failure("open_edit", err),
        }
    }

    /// Dialog dismissed.
    #[frb(sync)]
    pub fn cancel(&mut self) -> SessionActionResponse {
        match self.view.cancel() {
            Ok(()) => SessionActionResponse::success("Form closed.", None),
            Err(err) => view_failure("cancel", err),
        }
    }

    /// "Save" in the open dialog.
    #[frb(sync)]
    pub fn submit(
        &mut self,
        title: String,
        description: Option<String>,
        due_date: Option<String>,
        priority: Option<String>,
    ) -> SessionActionResponse {
        let input = TaskFormInput {
            title,
            description,
            due_date,
            priority,
        };
        match self.view.submit(input) {
            Ok(SubmitOutcome::Added(task)) => {
                SessionActionResponse::success("Task added.", Some(task.id))
            }
            Ok(SubmitOutcome::Updated(task)) => {
                SessionActionResponse::success("Task updated.", Some(task.id))
            }
            Ok(SubmitOutcome::Rejected(err)) => SessionActionResponse {
                ok: false,
                task_id: None,
                message: format!("submit rejected: {err}"),
                field_errors: err.errors().iter().map(to_field_error_item).collect(),
            },
            Err(err) => view_failure("submit", err),
        }
    }

    /// "Delete" button on row `task_id`. Unknown ids succeed as a no-op.
    #[frb(sync)]
    pub fn delete(&mut self, task_id: u64) -> SessionActionResponse {
        let id = TaskId::new(task_id);
        match self.view.delete(id) {
            Some(task) => SessionActionResponse::success("Task deleted.", Some(task.id)),
            None => SessionActionResponse::success("Nothing to delete.", None),
        }
    }

    /// Current screen snapshot.
    #[frb(sync)]
    pub fn render(&self) -> TasksRenderResponse {
        let model = self.view.render();
        TasksRenderResponse {
            rows: model.rows.iter().map(to_task_row_item).collect(),
            modal: model.modal.as_ref().map(to_modal_item),
            empty: model.empty,
        }
    }

    /// Toast messages queued since the last call, oldest first.
    #[frb(sync)]
    pub fn drain_notifications(&mut self) -> Vec<String> {
        self.view
            .drain_notifications()
            .into_iter()
            .map(|notification| notification.message().to_string())
            .collect()
    }
}

impl Default for TasksSession {
    fn default() -> Self {
        Self::new()
    }
}

fn view_failure(action: &str, err: ViewError) -> SessionActionResponse {
    log::warn!("event=ffi_action module=ffi status=rejected action={action}");
    SessionActionResponse::failure(format!("{action} failed: {err}"))
}

fn to_field_error_item(error: &FieldError) -> FieldErrorItem {
    FieldErrorItem {
        field: error.field.as_str().to_string(),
        message: error.message.clone(),
    }
}

fn to_task_row_item(row: &TaskRow) -> TaskRowItem {
    TaskRowItem {
        id: row.id.get(),
        title: row.title.clone(),
        description: row.description.clone(),
        due_label: row.due_label.clone(),
        priority_label: row.priority_label.clone(),
    }
}

fn to_modal_item(modal: &ModalViewModel) -> ModalItem {
    ModalItem {
        kind: match modal.kind {
            ModalKind::Add => "add".to_string(),
            ModalKind::Edit => "edit".to_string(),
        },
        heading: modal.title.clone(),
        target_id: modal.target.map(TaskId::get),
        title: modal.draft.title.clone(),
        description: modal.draft.description.clone(),
        due_date: modal.draft.due_date.clone(),
        priority: modal.draft.priority.clone(),
        field_errors: modal.errors.iter().map(to_field_error_item).collect(),
        priority_options: modal.priority_options.clone(),
    }
}
