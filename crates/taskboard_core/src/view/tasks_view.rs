//! Tasks view controller.
//!
//! # Responsibility
//! - Own the task store, the modal state and the open form's draft.
//! - Route UI actions through validation into store mutations.
//! - Emit one notification per successful mutation.
//!
//! # Invariants
//! - A rejected submit mutates nothing and keeps the modal open with the
//!   submitted values and their field errors.
//! - A successful submit closes the modal and clears the draft.
//! - Deleting the task under edit closes the edit modal.

use log::{debug, info, warn};

use crate::model::task::{Priority, Task, TaskId};
use crate::notify::{Notification, NotificationQueue, Notifier};
use crate::store::{InMemoryTaskRepository, TaskRepository};
use crate::validation::{FormSchema, TaskFormInput, TaskSchema, ValidationError};
use crate::view::error::{ViewError, ViewResult};
use crate::view::modal::ModalState;
use crate::view::view_model::{ModalViewModel, TaskRow, TasksViewModel};

/// Result of an accepted submit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Task),
    Updated(Task),
    /// Validation failed; nothing changed and the modal stays open.
    Rejected(ValidationError),
}

/// Explicit view state, owned by whoever shows the tasks screen.
pub struct TasksView<R: TaskRepository, N: Notifier> {
    repo: R,
    notifier: N,
    schema: TaskSchema,
    modal: ModalState,
    draft: TaskFormInput,
    errors: Option<ValidationError>,
}

impl TasksView<InMemoryTaskRepository, NotificationQueue> {
    /// Empty view backed by an in-memory store and a notification queue.
    pub fn in_memory() -> Self {
        Self::new(InMemoryTaskRepository::new(), NotificationQueue::new())
    }

    /// Takes pending notifications, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifier.drain()
    }
}

impl Default for TasksView<InMemoryTaskRepository, NotificationQueue> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: TaskRepository, N: Notifier> TasksView<R, N> {
    pub fn new(repo: R, notifier: N) -> Self {
        Self {
            repo,
            notifier,
            schema: TaskSchema,
            modal: ModalState::Closed,
            draft: TaskFormInput::default(),
            errors: None,
        }
    }

    /// Store contents in display order.
    pub fn tasks(&self) -> &[Task] {
        self.repo.list()
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// Values currently shown in the open form.
    pub fn draft(&self) -> &TaskFormInput {
        &self.draft
    }

    /// Errors from the last rejected submit of the open form.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.errors.as_ref()
    }

    /// "Add Task" action: opens an empty add form.
    pub fn open_add(&mut self) -> ViewResult<()> {
        self.modal.open_add()?;
        self.reset_form();
        debug!("event=modal_open module=view status=ok modal=add");
        Ok(())
    }

    /// "Edit" action: opens the edit form prefilled from task `id`.
    pub fn open_edit(&mut self, id: TaskId) -> ViewResult<()> {
        if self.modal.is_open() {
            return Err(ViewError::ModalAlreadyOpen(self.modal));
        }
        let prefill = self
            .repo
            .get(id)
            .map(TaskFormInput::from_task)
            .ok_or(ViewError::TaskNotFound(id))?;

        self.modal.open_edit(id)?;
        self.draft = prefill;
        self.errors = None;
        debug!("event=modal_open module=view status=ok modal=edit id={id}");
        Ok(())
    }

    /// Cancel or dismiss the open modal, discarding the draft.
    pub fn cancel(&mut self) -> ViewResult<()> {
        let closed = self.modal.close()?;
        self.reset_form();
        debug!(
            "event=modal_cancel module=view status=ok modal={}",
            closed.label()
        );
        Ok(())
    }

    /// Submits the open form.
    ///
    /// # Errors
    /// - `NoModalOpen` when no form is open.
    /// - `TaskNotFound` when the edit target disappeared; the modal is closed
    ///   and no notification fires.
    /// - `IdsExhausted` when the store cannot take another task; the add
    ///   modal stays open with the submitted values.
    pub fn submit(&mut self, input: TaskFormInput) -> ViewResult<SubmitOutcome> {
        if !self.modal.is_open() {
            return Err(ViewError::NoModalOpen);
        }

        let validated = match self.schema.validate(&input) {
            Ok(validated) => validated,
            Err(err) => {
                self.draft = input;
                self.errors = Some(err.clone());
                return Ok(SubmitOutcome::Rejected(err));
            }
        };

        match self.modal {
            ModalState::AddOpen => match self.repo.add(validated) {
                Ok(task) => {
                    self.modal.close()?;
                    self.reset_form();
                    self.notifier.notify(Notification::TaskAdded);
                    info!(
                        "event=task_add module=view status=ok id={} count={}",
                        task.id,
                        self.repo.len()
                    );
                    Ok(SubmitOutcome::Added(task))
                }
                Err(err) => {
                    self.draft = input;
                    self.errors = None;
                    warn!(
                        "event=task_add module=view status=ids_exhausted count={}",
                        self.repo.len()
                    );
                    Err(err.into())
                }
            },
            ModalState::EditOpen(id) => {
                self.modal.close()?;
                self.reset_form();
                match self.repo.update(id, validated) {
                    Ok(task) => {
                        self.notifier.notify(Notification::TaskUpdated);
                        info!("event=task_update module=view status=ok id={id}");
                        Ok(SubmitOutcome::Updated(task))
                    }
                    Err(err) => {
                        warn!("event=task_update module=view status=not_found id={id}");
                        Err(err.into())
                    }
                }
            }
            ModalState::Closed => Err(ViewError::NoModalOpen),
        }
    }

    /// "Delete" action. Immediate, no confirmation.
    ///
    /// Returns the removed task, or `None` when `id` was not present.
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.repo.remove(id);
        match removed {
            Some(_) => {
                if self.modal.edit_target() == Some(id) {
                    self.modal = ModalState::Closed;
                    self.reset_form();
                }
                self.notifier.notify(Notification::TaskDeleted);
                info!(
                    "event=task_delete module=view status=ok id={id} count={}",
                    self.repo.len()
                );
            }
            None => debug!("event=task_delete module=view status=noop id={id}"),
        }
        removed
    }

    /// Builds the render snapshot. Pure; does not touch state.
    pub fn render(&self) -> TasksViewModel {
        let rows: Vec<TaskRow> = self.repo.list().iter().map(TaskRow::from).collect();
        let modal = self.modal.kind().map(|kind| ModalViewModel {
            kind,
            title: kind.heading().to_string(),
            target: self.modal.edit_target(),
            draft: self.draft.clone(),
            errors: self
                .errors
                .as_ref()
                .map(|err| err.errors().to_vec())
                .unwrap_or_default(),
            priority_options: Priority::ALL
                .iter()
                .map(|priority| priority.as_str().to_string())
                .collect(),
        });

        TasksViewModel {
            empty: rows.is_empty(),
            rows,
            modal,
        }
    }

    fn reset_form(&mut self) {
        self.draft = TaskFormInput::default();
        self.errors = None;
    }
}
