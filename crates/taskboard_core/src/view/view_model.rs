//! Render-ready snapshot of the tasks view.

use serde::Serialize;

use crate::format::{due_label, priority_label};
use crate::model::task::{Task, TaskId};
use crate::validation::{FieldError, FormField, TaskFormInput};
use crate::view::modal::ModalKind;

/// Everything the UI needs to draw the tasks screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksViewModel {
    pub rows: Vec<TaskRow>,
    pub modal: Option<ModalViewModel>,
    pub empty: bool,
}

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub due_label: String,
    pub priority_label: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            due_label: due_label(task.due_date),
            priority_label: priority_label(task.priority),
        }
    }
}

/// Open add/edit dialog with its current values and inline errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalViewModel {
    pub kind: ModalKind,
    /// "Add Task" or "Edit Task".
    pub title: String,
    pub target: Option<TaskId>,
    pub draft: TaskFormInput,
    pub errors: Vec<FieldError>,
    /// Choices for the priority picker, lowest first.
    pub priority_options: Vec<String>,
}

impl ModalViewModel {
    /// Inline message to show next to `field`.
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}
