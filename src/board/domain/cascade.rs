//! Task disposition applied when a column is deleted.

use super::{BoardDomainError, Column, ColumnId, Task};
use serde::{Deserialize, Serialize};

/// What happens to a deleted column's tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskDisposition {
    /// Remove every task owned by the column.
    DeleteTasks,
    /// Reassign every task owned by the column to `destination`.
    MoveTasks {
        /// Surviving column; the deletion is refused until one is chosen.
        destination: Option<ColumnId>,
    },
}

/// A column deletion together with its task disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDeletion {
    /// Column to delete.
    pub column_id: ColumnId,
    /// Disposition for the column's tasks.
    pub disposition: TaskDisposition,
}

impl ColumnDeletion {
    /// Deletes the column and all of its tasks.
    #[must_use]
    pub const fn delete_tasks(column_id: ColumnId) -> Self {
        Self {
            column_id,
            disposition: TaskDisposition::DeleteTasks,
        }
    }

    /// Deletes the column and moves its tasks to `destination`.
    #[must_use]
    pub const fn move_tasks(column_id: ColumnId, destination: Option<ColumnId>) -> Self {
        Self {
            column_id,
            disposition: TaskDisposition::MoveTasks { destination },
        }
    }

    /// Checks that the deletion can be committed against `columns`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] for an unknown column,
    /// [`BoardDomainError::DeletionDestinationMissing`] when tasks are to be
    /// moved without a destination, and
    /// [`BoardDomainError::InvalidDeletionDestination`] when the destination
    /// is the deleted column or unknown.
    pub fn validate(&self, columns: &[Column]) -> Result<(), BoardDomainError> {
        let exists = |id: ColumnId| columns.iter().any(|column| column.id() == id);
        if !exists(self.column_id) {
            return Err(BoardDomainError::ColumnNotFound(self.column_id));
        }
        match self.disposition {
            TaskDisposition::DeleteTasks => Ok(()),
            TaskDisposition::MoveTasks { destination: None } => {
                Err(BoardDomainError::DeletionDestinationMissing(self.column_id))
            }
            TaskDisposition::MoveTasks {
                destination: Some(destination),
            } => {
                if destination == self.column_id || !exists(destination) {
                    return Err(BoardDomainError::InvalidDeletionDestination {
                        column: self.column_id,
                        destination,
                    });
                }
                Ok(())
            }
        }
    }

    /// Applies the disposition to the task sequence.
    ///
    /// Moved tasks are appended after the destination's existing tasks in
    /// their original relative order. Call [`Self::validate`] first; an
    /// unresolved destination leaves the tasks untouched.
    #[must_use]
    pub fn cascade(&self, tasks: &[Task]) -> Vec<Task> {
        let (owned, others): (Vec<&Task>, Vec<&Task>) = tasks
            .iter()
            .partition(|task| task.column_id() == self.column_id);

        match self.disposition {
            TaskDisposition::DeleteTasks => others.into_iter().cloned().collect(),
            TaskDisposition::MoveTasks {
                destination: Some(destination),
            } => others
                .into_iter()
                .cloned()
                .chain(owned.into_iter().map(|task| task.moved_to(destination)))
                .collect(),
            TaskDisposition::MoveTasks { destination: None } => tasks.to_vec(),
        }
    }
}
