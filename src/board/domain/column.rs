//! Column ("list") entity.

use super::{ColumnId, ColumnTitle};
use serde::{Deserialize, Serialize};

/// A named bucket of tasks. Membership is derived from each task's column id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    title: ColumnTitle,
}

impl Column {
    /// Creates a column with a fresh identifier.
    #[must_use]
    pub fn new(title: ColumnTitle) -> Self {
        Self {
            id: ColumnId::new(),
            title,
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column title.
    #[must_use]
    pub const fn title(&self) -> &ColumnTitle {
        &self.title
    }

    /// Returns a copy of this column with a new title.
    #[must_use]
    pub fn renamed(&self, title: ColumnTitle) -> Self {
        Self { id: self.id, title }
    }
}
