//! Repository port for loading and saving the whole board.

use crate::board::domain::Board;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract.
///
/// The board is always read and written as one value; namespacing and schema
/// versioning are left to implementations.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Loads the last saved board.
    ///
    /// Returns `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Corrupt`] when stored data cannot be
    /// decoded into a valid board, [`BoardRepositoryError::UnsupportedSchema`]
    /// for data written by an unknown schema version, or
    /// [`BoardRepositoryError::Persistence`] when storage cannot be read.
    async fn load(&self) -> BoardRepositoryResult<Option<Board>>;

    /// Replaces the saved board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when storage cannot be
    /// written.
    async fn save(&self, board: &Board) -> BoardRepositoryResult<()>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// Stored data is unreadable or violates board invariants.
    #[error("stored board is corrupt: {0}")]
    Corrupt(String),

    /// Stored data was written with an unknown schema version.
    #[error("unsupported board schema version {0}")]
    UnsupportedSchema(u32),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Describes corrupt stored data.
    pub fn corrupt(reason: impl std::fmt::Display) -> Self {
        Self::Corrupt(reason.to_string())
    }
}
