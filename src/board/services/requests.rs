//! Request payloads accepted by the board service.
//!
//! Requests carry raw form input; validation into domain values happens when
//! the service consumes them.

use super::BoardConfig;
use crate::board::domain::{
    BoardDomainError, ColumnId, ColumnTitle, Priority, TaskColor, TaskDescription, TaskDraft,
    TaskEdit, TaskId, TaskTitle,
};

/// Request payload for adding a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateColumnRequest {
    title: String,
}

impl CreateColumnRequest {
    /// Creates a request for a column titled `title`.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub(super) fn into_title(self) -> Result<ColumnTitle, BoardDomainError> {
        ColumnTitle::new(self.title)
    }
}

/// Request payload for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    column_id: ColumnId,
    title: String,
    description: Option<String>,
    color: Option<String>,
    priority: Option<Priority>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(column_id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            column_id,
            title: title.into(),
            description: None,
            color: None,
            priority: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the card colour as `#RRGGBB`.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub(super) fn into_draft(self, config: &BoardConfig) -> Result<TaskDraft, BoardDomainError> {
        let title = TaskTitle::new(self.title)?;
        let description = match self.description {
            Some(raw) => TaskDescription::new(raw, config.effective_description_limit())?,
            None => None,
        };
        let color = match self.color {
            Some(raw) => TaskColor::choice(raw)?,
            None => None,
        };
        Ok(TaskDraft {
            title,
            description,
            column_id: self.column_id,
            color,
            priority: self.priority.or(config.default_priority),
        })
    }
}

/// Request payload for editing a task. Unset fields stay unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    task_id: TaskId,
    title: Option<String>,
    description: Option<String>,
    column_id: Option<ColumnId>,
    color: Option<String>,
    priority: Option<Option<Priority>>,
}

impl EditTaskRequest {
    /// Creates an empty edit of `task_id`.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            title: None,
            description: None,
            column_id: None,
            color: None,
            priority: None,
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description; a blank value clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Moves the task to another column, keeping its place in the sequence.
    #[must_use]
    pub fn with_column(mut self, column_id: ColumnId) -> Self {
        self.column_id = Some(column_id);
        self
    }

    /// Replaces the colour; `#FFFFFF` clears it.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Replaces or clears the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the task being edited.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    pub(super) fn into_edit(self, config: &BoardConfig) -> Result<TaskEdit, BoardDomainError> {
        let mut edit = TaskEdit::new();
        if let Some(raw) = self.title {
            edit = edit.with_title(TaskTitle::new(raw)?);
        }
        if let Some(raw) = self.description {
            edit = edit.with_description(TaskDescription::new(
                raw,
                config.effective_description_limit(),
            )?);
        }
        if let Some(column_id) = self.column_id {
            edit = edit.with_column(column_id);
        }
        if let Some(raw) = self.color {
            edit = edit.with_color(TaskColor::choice(raw)?);
        }
        if let Some(priority) = self.priority {
            edit = edit.with_priority(priority);
        }
        Ok(edit)
    }
}
