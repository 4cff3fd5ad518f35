//! Task domain model.
//!
//! # Responsibility
//! - Define the single record type held by the task store.
//! - Keep optional fields explicit so "absent" never collapses into "empty".
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - `title` is non-blank for every task created through a validated input.
//! - `description: Some("")` and `description: None` are different states.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::validation::ValidatedTaskInput;

/// Store-assigned task identifier.
///
/// Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Wraps a raw integer id, e.g. one echoed back by the UI layer.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Task priority level.
///
/// Absence of priority is modeled as `Option<Priority>::None`, never as an
/// extra variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All levels in ascending order, as offered by the priority picker.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Stable display and form value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parses an exact form value (`Low|Medium|High`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-created task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique within the owning store.
    pub id: TaskId,
    /// Non-blank title.
    pub title: String,
    /// Optional free text.
    pub description: Option<String>,
    /// Calendar date only; time-of-day is dropped at validation.
    pub due_date: Option<NaiveDate>,
    /// `None` means unset.
    pub priority: Option<Priority>,
}

impl Task {
    /// Builds a task from validated form fields and a store-assigned id.
    pub(crate) fn from_input(id: TaskId, input: ValidatedTaskInput) -> Self {
        let (title, description, due_date, priority) = input.into_parts();
        Self {
            id,
            title,
            description,
            due_date,
            priority,
        }
    }

    /// Replaces every editable field, keeping `id`.
    pub(crate) fn apply(&mut self, input: ValidatedTaskInput) {
        let (title, description, due_date, priority) = input.into_parts();
        self.title = title;
        self.description = description;
        self.due_date = due_date;
        self.priority = priority;
    }
}
