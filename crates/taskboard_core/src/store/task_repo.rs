//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/update/remove/list over an ordered task collection.
//! - Assign task ids from a monotonic counter.
//!
//! # Invariants
//! - Writes accept only `ValidatedTaskInput`.
//! - Ordering is insertion order; updates never move a task.
//! - Ids are never reused by the same repository, even after removal.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::task::{Task, TaskId};
use crate::validation::ValidatedTaskInput;

pub type StoreResult<T> = Result<T, StoreError>;

/// Task store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(TaskId),
    /// The id counter has issued `u64::MAX`; no further ids exist.
    IdsExhausted,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::IdsExhausted => write!(f, "task id space exhausted"),
        }
    }
}

impl Error for StoreError {}

/// Monotonic id source.
///
/// `next` becomes `None` once `u64::MAX` has been handed out.
#[derive(Debug, Clone)]
pub struct TaskIdGenerator {
    next: Option<u64>,
}

impl TaskIdGenerator {
    /// Generator whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    /// Returns a fresh id, strictly greater than every id returned before,
    /// or `None` when the id space is used up.
    pub fn next_id(&mut self) -> Option<TaskId> {
        let raw = self.next?;
        self.next = raw.checked_add(1);
        Some(TaskId::new(raw))
    }
}

impl Default for TaskIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Repository interface for task CRUD operations.
pub trait TaskRepository {
    /// Appends a new task and returns it.
    ///
    /// Fails only with `IdsExhausted`; the store is unchanged in that case.
    fn add(&mut self, input: ValidatedTaskInput) -> StoreResult<Task>;
    /// Replaces the editable fields of task `id`.
    fn update(&mut self, id: TaskId, input: ValidatedTaskInput) -> StoreResult<Task>;
    /// Removes task `id`. Absent ids are a no-op returning `None`.
    fn remove(&mut self, id: TaskId) -> Option<Task>;
    fn get(&self, id: TaskId) -> Option<&Task>;
    /// Current contents in insertion order.
    fn list(&self) -> &[Task];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Vec-backed task repository owned by one view.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
    ids: TaskIdGenerator,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generator(ids: TaskIdGenerator) -> Self {
        Self {
            tasks: Vec::new(),
            ids,
        }
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn add(&mut self, input: ValidatedTaskInput) -> StoreResult<Task> {
        let id = self.ids.next_id().ok_or(StoreError::IdsExhausted)?;
        let task = Task::from_input(id, input);
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn update(&mut self, id: TaskId, input: ValidatedTaskInput) -> StoreResult<Task> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let task = &mut self.tasks[index];
        task.apply(input);
        Ok(task.clone())
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn list(&self) -> &[Task] {
        &self.tasks
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryTaskRepository, StoreError, TaskIdGenerator, TaskRepository};
    use crate::model::task::TaskId;
    use crate::validation::{FormSchema, TaskFormInput, TaskSchema};

    fn validated(title: &str) -> crate::validation::ValidatedTaskInput {
        TaskSchema
            .validate(&TaskFormInput::with_title(title))
            .expect("title should validate")
    }

    #[test]
    fn generator_is_strictly_increasing() {
        let mut ids = TaskIdGenerator::default();
        let first = ids.next_id().expect("fresh generator");
        let second = ids.next_id().expect("second id");
        assert_eq!(first, TaskId::new(1));
        assert!(second > first);
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut repo = InMemoryTaskRepository::new();
        let a = repo.add(validated("a")).expect("id available");
        repo.remove(a.id).expect("a was present");
        let b = repo.add(validated("b")).expect("id available");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn custom_generator_sets_first_id() {
        let mut repo = InMemoryTaskRepository::with_generator(TaskIdGenerator::starting_at(100));
        let task = repo.add(validated("a")).expect("id available");
        assert_eq!(task.id, TaskId::new(100));
    }

    #[test]
    fn generator_at_max_issues_last_id_then_stops() {
        let mut ids = TaskIdGenerator::starting_at(u64::MAX);
        assert_eq!(ids.next_id(), Some(TaskId::new(u64::MAX)));
        assert_eq!(ids.next_id(), None);
        assert_eq!(ids.next_id(), None);
    }

    #[test]
    fn add_after_id_space_exhausted_fails_without_mutation() {
        let mut repo =
            InMemoryTaskRepository::with_generator(TaskIdGenerator::starting_at(u64::MAX));
        let last = repo.add(validated("last")).expect("u64::MAX is still issuable");
        assert_eq!(last.id, TaskId::new(u64::MAX));

        let err = repo.add(validated("overflow")).expect_err("no ids left");
        assert_eq!(err, StoreError::IdsExhausted);
        assert_eq!(repo.list(), std::slice::from_ref(&last));
    }
}
