//! Error types for board domain validation and parsing.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The column title is empty after trimming.
    #[error("column title must not be empty")]
    EmptyColumnTitle,

    /// The task description exceeds the configured limit.
    #[error("task description has {actual} characters, limit is {limit}")]
    DescriptionTooLong {
        /// Configured maximum number of characters.
        limit: usize,
        /// Number of characters supplied.
        actual: usize,
    },

    /// The colour is not a `#RRGGBB` hex value.
    #[error("invalid task colour '{0}', expected #RRGGBB")]
    InvalidColor(String),

    /// No task with the identifier exists on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// No column with the identifier exists on the board.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A column with the same identifier is already on the board.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// A task references a column that does not exist.
    #[error("task {task} references missing column {column}")]
    DanglingColumnReference {
        /// Offending task.
        task: TaskId,
        /// Column the task points at.
        column: ColumnId,
    },

    /// Tasks were to be moved but no destination column was chosen.
    #[error("deleting column {0} requires a destination column for its tasks")]
    DeletionDestinationMissing(ColumnId),

    /// The chosen destination is the deleted column itself or does not exist.
    #[error("column {destination} cannot receive the tasks of deleted column {column}")]
    InvalidDeletionDestination {
        /// Column being deleted.
        column: ColumnId,
        /// Rejected destination column.
        destination: ColumnId,
    },
}

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
