//! Drag-and-drop reconciliation of the ordered task sequence.
//!
//! Tasks carry no rank field: a column's display order is the order in which
//! its tasks appear in the board-wide sequence. Every function here is pure
//! and returns a fresh sequence; invalid drops leave the input untouched.

use super::{Column, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Terminal signal of a drag gesture, as reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEndEvent {
    /// Task being dragged.
    pub active_id: TaskId,
    /// Resolved drop target; `None` when the gesture was cancelled or
    /// released outside any target.
    #[serde(default)]
    pub target: Option<DropTarget>,
}

/// Where a dragged task was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DropTarget {
    /// The column container itself, typically its empty area.
    Column {
        /// Destination column.
        #[serde(rename = "columnId")]
        column_id: ColumnId,
    },
    /// Another task card.
    Task {
        /// Card the dragged task was released over.
        #[serde(rename = "taskId")]
        task_id: TaskId,
    },
}

impl DragEndEvent {
    /// Drop of `active_id` over another task.
    #[must_use]
    pub const fn onto_task(active_id: TaskId, task_id: TaskId) -> Self {
        Self {
            active_id,
            target: Some(DropTarget::Task { task_id }),
        }
    }

    /// Drop of `active_id` onto a column container.
    #[must_use]
    pub const fn onto_column(active_id: TaskId, column_id: ColumnId) -> Self {
        Self {
            active_id,
            target: Some(DropTarget::Column { column_id }),
        }
    }

    /// Gesture released outside any drop target.
    #[must_use]
    pub const fn cancelled(active_id: TaskId) -> Self {
        Self {
            active_id,
            target: None,
        }
    }
}

/// Computes the task sequence that results from a drag-end event.
///
/// Unresolvable events (no target, unknown task or column) return a copy of
/// `tasks` unchanged.
#[must_use]
pub fn apply_drag_end(tasks: &[Task], columns: &[Column], event: &DragEndEvent) -> Vec<Task> {
    reconcile(tasks, columns, event).unwrap_or_else(|| tasks.to_vec())
}

/// Moves the element at `from` to `to`, shifting the elements in between by
/// one position towards `from`.
///
/// Equal or out-of-range indices return the items unchanged.
#[must_use]
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from == to || from >= moved.len() || to >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

fn reconcile(tasks: &[Task], columns: &[Column], event: &DragEndEvent) -> Option<Vec<Task>> {
    let Some(target) = event.target else {
        debug!(active_id = %event.active_id, "drag ended outside any drop target");
        return None;
    };
    let Some(active) = find_task(tasks, event.active_id) else {
        debug!(active_id = %event.active_id, "dragged task is not on the board");
        return None;
    };

    match target {
        DropTarget::Column { column_id } => drop_on_column(tasks, columns, active, column_id),
        DropTarget::Task { task_id } => {
            let Some(over) = find_task(tasks, task_id) else {
                debug!(over_id = %task_id, "drop target task is not on the board");
                return None;
            };
            if active.column_id() == over.column_id() {
                reorder_within_column(tasks, active, over)
            } else {
                move_across_columns(tasks, active, over)
            }
        }
    }
}

fn find_task(tasks: &[Task], id: TaskId) -> Option<&Task> {
    tasks.iter().find(|task| task.id() == id)
}

/// Reassigns the task to the column and places it after the column's
/// existing tasks.
fn drop_on_column(
    tasks: &[Task],
    columns: &[Column],
    active: &Task,
    column_id: ColumnId,
) -> Option<Vec<Task>> {
    if !columns.iter().any(|column| column.id() == column_id) {
        debug!(column_id = %column_id, "drop target column is not on the board");
        return None;
    }
    let already_last = tasks
        .iter()
        .rev()
        .find(|task| task.column_id() == column_id)
        .is_some_and(|last| last.id() == active.id());
    if already_last {
        debug!(task_id = %active.id(), "task is already last in its column");
        return None;
    }
    let moved = active.moved_to(column_id);
    Some(
        tasks
            .iter()
            .filter(|task| task.id() != active.id())
            .cloned()
            .chain(std::iter::once(moved))
            .collect(),
    )
}

fn reorder_within_column(tasks: &[Task], active: &Task, over: &Task) -> Option<Vec<Task>> {
    let column_id = active.column_id();
    let (column_tasks, others): (Vec<&Task>, Vec<&Task>) = tasks
        .iter()
        .partition(|task| task.column_id() == column_id);

    let from = column_tasks.iter().position(|task| task.id() == active.id())?;
    let to = column_tasks.iter().position(|task| task.id() == over.id())?;
    if from == to {
        debug!(task_id = %active.id(), "task dropped onto itself");
        return None;
    }

    let reordered = array_move(&column_tasks, from, to);
    Some(others.into_iter().chain(reordered).cloned().collect())
}

/// Inserts the task immediately before `over` in `over`'s column.
fn move_across_columns(tasks: &[Task], active: &Task, over: &Task) -> Option<Vec<Task>> {
    let destination = over.column_id();
    let moved = active.moved_to(destination);
    let (mut destination_tasks, others): (Vec<&Task>, Vec<&Task>) = tasks
        .iter()
        .filter(|task| task.id() != active.id())
        .partition(|task| task.column_id() == destination);

    let index = destination_tasks
        .iter()
        .position(|task| task.id() == over.id())?;
    destination_tasks.insert(index, &moved);

    Some(others.into_iter().chain(destination_tasks).cloned().collect())
}
