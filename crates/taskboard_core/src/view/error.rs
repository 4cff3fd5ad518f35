use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::task::TaskId;
use crate::store::StoreError;
use crate::view::modal::ModalState;

pub type ViewResult<T> = Result<T, ViewError>;

/// Rejected view transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A modal is already open; close it before opening another.
    ModalAlreadyOpen(ModalState),
    /// Submit or cancel with no modal open.
    NoModalOpen,
    /// Target task is not in the store.
    TaskNotFound(TaskId),
    /// The store cannot issue another task id.
    IdsExhausted,
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModalAlreadyOpen(current) => {
                write!(f, "a modal is already open: {}", current.label())
            }
            Self::NoModalOpen => write!(f, "no modal is open"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::IdsExhausted => write!(f, "no task ids left"),
        }
    }
}

impl Error for ViewError {}

impl From<StoreError> for ViewError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::TaskNotFound(id),
            StoreError::IdsExhausted => Self::IdsExhausted,
        }
    }
}
