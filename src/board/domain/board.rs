//! Board aggregate: ordered columns and the board-wide task sequence.

use super::{
    BoardDomainError, Column, ColumnDeletion, ColumnId, ColumnTitle, DragEndEvent, Priority,
    Task, TaskColor, TaskDescription, TaskDraft, TaskEdit, TaskId, TaskTitle, reorder,
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Complete board state.
///
/// Every mutation returns a new board so callers can swap the whole value in
/// one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersistedBoard")]
pub struct Board {
    columns: Vec<Column>,
    tasks: Vec<Task>,
}

/// Unvalidated board shape read from storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedBoard {
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// Tasks in board-wide order.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TryFrom<PersistedBoard> for Board {
    type Error = BoardDomainError;

    fn try_from(value: PersistedBoard) -> Result<Self, Self::Error> {
        Self::new(value.columns, value.tasks)
    }
}

/// One column together with the tasks it displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTasks<'a> {
    /// The column.
    pub column: &'a Column,
    /// Its tasks in display order.
    pub tasks: Vec<&'a Task>,
}

impl Board {
    /// Builds a board after checking identifier uniqueness and that every
    /// task references an existing column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumn`],
    /// [`BoardDomainError::DuplicateTask`] or
    /// [`BoardDomainError::DanglingColumnReference`].
    pub fn new(columns: Vec<Column>, tasks: Vec<Task>) -> Result<Self, BoardDomainError> {
        validate(&columns, &tasks)?;
        Ok(Self { columns, tasks })
    }

    /// Creates a board with no columns.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            columns: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Creates the starter board shown when nothing has been saved yet.
    #[must_use]
    pub fn seed(clock: &impl Clock) -> Self {
        let columns: Vec<Column> = ["To Do", "In Progress", "Done"]
            .into_iter()
            .filter_map(|title| ColumnTitle::new(title).ok())
            .map(Column::new)
            .collect();
        let welcome = columns.first().and_then(|todo| {
            let title = TaskTitle::new("Welcome to your board").ok()?;
            let description = TaskDescription::new(
                "This is a sample task. Drag me between columns.",
                TaskDescription::DEFAULT_LIMIT,
            )
            .ok()?;
            Some(Task::new(
                TaskDraft {
                    title,
                    description,
                    column_id: todo.id(),
                    color: None,
                    priority: Some(Priority::Medium),
                },
                clock,
            ))
        });

        Self {
            columns,
            tasks: welcome.into_iter().collect(),
        }
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns every task in board-wide order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a column by identifier.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the tasks of one column in display order.
    pub fn tasks_in_column(&self, id: ColumnId) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.column_id() == id)
    }

    /// Groups tasks by column, keeping only titles containing `query`
    /// (case-insensitive). A blank query matches every task.
    #[must_use]
    pub fn tasks_by_column(&self, query: &str) -> Vec<ColumnTasks<'_>> {
        let needle = query.trim().to_lowercase();
        self.columns
            .iter()
            .map(|column| ColumnTasks {
                column,
                tasks: self
                    .tasks_in_column(column.id())
                    .filter(|task| {
                        needle.is_empty() || task.title().as_str().to_lowercase().contains(&needle)
                    })
                    .collect(),
            })
            .collect()
    }

    /// Appends a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumn`] if the identifier is
    /// already used.
    pub fn add_column(&self, column: Column) -> Result<Self, BoardDomainError> {
        if self.column(column.id()).is_some() {
            return Err(BoardDomainError::DuplicateColumn(column.id()));
        }
        let mut next = self.clone();
        next.columns.push(column);
        Ok(next)
    }

    /// Renames a column in place.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] for an unknown column.
    pub fn rename_column(&self, id: ColumnId, title: ColumnTitle) -> Result<Self, BoardDomainError> {
        let mut next = self.clone();
        let column = next
            .columns
            .iter_mut()
            .find(|column| column.id() == id)
            .ok_or(BoardDomainError::ColumnNotFound(id))?;
        *column = column.renamed(title);
        Ok(next)
    }

    /// Deletes a column after applying its task disposition.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`ColumnDeletion::validate`]; the
    /// board is left unchanged.
    pub fn delete_column(&self, deletion: &ColumnDeletion) -> Result<Self, BoardDomainError> {
        deletion.validate(&self.columns)?;
        let tasks = deletion.cascade(&self.tasks);
        let columns = self
            .columns
            .iter()
            .filter(|column| column.id() != deletion.column_id)
            .cloned()
            .collect();
        Ok(Self { columns, tasks })
    }

    /// Adds a task at the top of its column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] when the task's column is
    /// unknown or [`BoardDomainError::DuplicateTask`] when its identifier is
    /// already used.
    pub fn add_task(&self, task: Task) -> Result<Self, BoardDomainError> {
        if self.column(task.column_id()).is_none() {
            return Err(BoardDomainError::ColumnNotFound(task.column_id()));
        }
        if self.task(task.id()).is_some() {
            return Err(BoardDomainError::DuplicateTask(task.id()));
        }
        let tasks = std::iter::once(task)
            .chain(self.tasks.iter().cloned())
            .collect();
        Ok(Self {
            columns: self.columns.clone(),
            tasks,
        })
    }

    /// Applies an edit to one task without moving it in the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] for an unknown task or
    /// [`BoardDomainError::ColumnNotFound`] when the edit moves the task to an
    /// unknown column.
    pub fn edit_task(
        &self,
        id: TaskId,
        edit: TaskEdit,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        if let Some(column_id) = edit.column_id()
            && self.column(column_id).is_none()
        {
            return Err(BoardDomainError::ColumnNotFound(column_id));
        }
        let mut next = self.clone();
        let task = next
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(BoardDomainError::TaskNotFound(id))?;
        task.apply_edit(edit, clock);
        Ok(next)
    }

    /// Replaces or clears a task's colour.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] for an unknown task.
    pub fn set_task_color(
        &self,
        id: TaskId,
        color: Option<TaskColor>,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        self.edit_task(id, TaskEdit::new().with_color(color), clock)
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] for an unknown task.
    pub fn remove_task(&self, id: TaskId) -> Result<Self, BoardDomainError> {
        if self.task(id).is_none() {
            return Err(BoardDomainError::TaskNotFound(id));
        }
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        Ok(Self {
            columns: self.columns.clone(),
            tasks,
        })
    }

    /// Applies a drag-end event. Unresolvable events return an equal board.
    #[must_use]
    pub fn apply_drag_end(&self, event: &DragEndEvent) -> Self {
        Self {
            columns: self.columns.clone(),
            tasks: reorder::apply_drag_end(&self.tasks, &self.columns, event),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

fn validate(columns: &[Column], tasks: &[Task]) -> Result<(), BoardDomainError> {
    let mut column_ids = HashSet::with_capacity(columns.len());
    for column in columns {
        if !column_ids.insert(column.id()) {
            return Err(BoardDomainError::DuplicateColumn(column.id()));
        }
    }

    let mut task_ids = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !task_ids.insert(task.id()) {
            return Err(BoardDomainError::DuplicateTask(task.id()));
        }
        if !column_ids.contains(&task.column_id()) {
            return Err(BoardDomainError::DanglingColumnReference {
                task: task.id(),
                column: task.column_id(),
            });
        }
    }
    Ok(())
}
