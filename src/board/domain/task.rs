//! Task card entity and edit parameter objects.

use super::{ColumnId, Priority, TaskColor, TaskDescription, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A work item owned by exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    #[serde(
        default,
        deserialize_with = "super::text::deserialize_description",
        skip_serializing_if = "Option::is_none"
    )]
    description: Option<TaskDescription>,
    column_id: ColumnId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<TaskColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Validated fields for a task that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Card title.
    pub title: TaskTitle,
    /// Optional card body.
    pub description: Option<TaskDescription>,
    /// Owning column.
    pub column_id: ColumnId,
    /// Optional card colour.
    pub color: Option<TaskColor>,
    /// Optional priority marker.
    pub priority: Option<Priority>,
}

impl Task {
    /// Creates a task with a fresh identifier and creation timestamp.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: draft.title,
            description: draft.description,
            column_id: draft.column_id,
            color: draft.color,
            priority: draft.priority,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the card title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the card body, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns the owning column.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the card colour, if any.
    #[must_use]
    pub const fn color(&self) -> Option<&TaskColor> {
        self.color.as_ref()
    }

    /// Returns the priority marker, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest edit timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns a copy of this task owned by `column_id`.
    ///
    /// Moving a card is not an edit, so `updated_at` is left alone.
    #[must_use]
    pub fn moved_to(&self, column_id: ColumnId) -> Self {
        Self {
            column_id,
            ..self.clone()
        }
    }

    /// Applies an edit patch and touches `updated_at`.
    pub fn apply_edit(&mut self, edit: TaskEdit, clock: &impl Clock) {
        let TaskEdit {
            title,
            description,
            column_id,
            color,
            priority,
        } = edit;
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = new_description;
        }
        if let Some(new_column) = column_id {
            self.column_id = new_column;
        }
        if let Some(new_color) = color {
            self.color = new_color;
        }
        if let Some(new_priority) = priority {
            self.priority = new_priority;
        }
        self.updated_at = clock.utc();
    }
}

/// Patch applied by the task edit form. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    title: Option<TaskTitle>,
    description: Option<Option<TaskDescription>>,
    column_id: Option<ColumnId>,
    color: Option<Option<TaskColor>>,
    priority: Option<Option<Priority>>,
}

impl TaskEdit {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: TaskTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces or clears the description.
    #[must_use]
    pub fn with_description(mut self, description: Option<TaskDescription>) -> Self {
        self.description = Some(description);
        self
    }

    /// Reassigns the task to another column.
    #[must_use]
    pub fn with_column(mut self, column_id: ColumnId) -> Self {
        self.column_id = Some(column_id);
        self
    }

    /// Replaces or clears the colour.
    #[must_use]
    pub fn with_color(mut self, color: Option<TaskColor>) -> Self {
        self.color = Some(color);
        self
    }

    /// Replaces or clears the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the destination column when the patch moves the task.
    #[must_use]
    pub const fn column_id(&self) -> Option<ColumnId> {
        self.column_id
    }
}
