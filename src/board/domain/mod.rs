//! Domain model for the Kanban board.
//!
//! Columns and tasks are plain values; the [`Board`] aggregate enforces the
//! cross-entity invariants and produces a fresh board for every change. The
//! reordering engine and the column-deletion cascade are pure functions over
//! the board-wide task sequence.

mod board;
mod cascade;
mod color;
mod column;
mod error;
mod ids;
mod priority;
pub mod reorder;
mod task;
mod text;

pub use board::{Board, ColumnTasks, PersistedBoard};
pub use cascade::{ColumnDeletion, TaskDisposition};
pub use color::TaskColor;
pub use column::Column;
pub use error::{BoardDomainError, ParsePriorityError};
pub use ids::{ColumnId, TaskId};
pub use priority::Priority;
pub use reorder::{DragEndEvent, DropTarget, apply_drag_end, array_move};
pub use task::{Task, TaskDraft, TaskEdit};
pub use text::{ColumnTitle, TaskDescription, TaskTitle};
