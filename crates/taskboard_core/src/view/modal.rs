//! Modal visibility state machine.
//!
//! # Invariants
//! - At most one modal is open; the tagged enum makes the other states
//!   unrepresentable.
//! - Opening requires `Closed`; closing requires an open modal.

use serde::{Deserialize, Serialize};

use crate::model::task::TaskId;
use crate::view::error::{ViewError, ViewResult};

/// Which modal, if any, is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "target", rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Closed,
    AddOpen,
    EditOpen(TaskId),
}

/// Open modal flavor, without the edit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    Add,
    Edit,
}

impl ModalKind {
    /// Dialog heading.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Add => "Add Task",
            Self::Edit => "Edit Task",
        }
    }
}

impl ModalState {
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn kind(self) -> Option<ModalKind> {
        match self {
            Self::Closed => None,
            Self::AddOpen => Some(ModalKind::Add),
            Self::EditOpen(_) => Some(ModalKind::Edit),
        }
    }

    /// Task targeted by the edit modal.
    pub fn edit_target(self) -> Option<TaskId> {
        match self {
            Self::EditOpen(id) => Some(id),
            _ => None,
        }
    }

    /// Short label for logs and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::AddOpen => "add",
            Self::EditOpen(_) => "edit",
        }
    }

    /// `Closed → AddOpen`.
    pub fn open_add(&mut self) -> ViewResult<()> {
        self.ensure_closed()?;
        *self = Self::AddOpen;
        Ok(())
    }

    /// `Closed → EditOpen(id)`.
    pub fn open_edit(&mut self, id: TaskId) -> ViewResult<()> {
        self.ensure_closed()?;
        *self = Self::EditOpen(id);
        Ok(())
    }

    /// `AddOpen | EditOpen(_) → Closed`, returning the state that was closed.
    pub fn close(&mut self) -> ViewResult<ModalState> {
        if !self.is_open() {
            return Err(ViewError::NoModalOpen);
        }
        Ok(std::mem::take(self))
    }

    fn ensure_closed(self) -> ViewResult<()> {
        if self.is_open() {
            return Err(ViewError::ModalAlreadyOpen(self));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ModalKind, ModalState};
    use crate::model::task::TaskId;
    use crate::view::error::ViewError;

    #[test]
    fn open_and_close_cycle() {
        let mut state = ModalState::default();
        state.open_add().expect("closed → add");
        assert_eq!(state.kind(), Some(ModalKind::Add));

        assert_eq!(state.close().expect("add → closed"), ModalState::AddOpen);
        assert_eq!(state, ModalState::Closed);

        state.open_edit(TaskId::new(3)).expect("closed → edit");
        assert_eq!(state.edit_target(), Some(TaskId::new(3)));
    }

    #[test]
    fn second_open_is_rejected_and_keeps_state() {
        let mut state = ModalState::EditOpen(TaskId::new(1));
        let err = state.open_add().expect_err("edit is open");
        assert_eq!(err, ViewError::ModalAlreadyOpen(ModalState::EditOpen(TaskId::new(1))));
        assert_eq!(state, ModalState::EditOpen(TaskId::new(1)));

        let mut state = ModalState::AddOpen;
        assert!(state.open_edit(TaskId::new(2)).is_err());
        assert_eq!(state, ModalState::AddOpen);
    }

    #[test]
    fn close_when_closed_is_rejected() {
        let mut state = ModalState::Closed;
        assert_eq!(state.close(), Err(ViewError::NoModalOpen));
    }
}
