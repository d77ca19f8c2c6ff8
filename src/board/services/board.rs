//! Board state container: commits intents and notifies subscribers.

use super::{BoardConfig, CreateColumnRequest, CreateTaskRequest, EditTaskRequest};
use crate::board::{
    domain::{
        Board, BoardDomainError, Column, ColumnDeletion, ColumnId, ColumnTitle, DragEndEvent,
        Task, TaskColor, TaskId,
    },
    ports::{BoardRepository, BoardRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Holds the current board and applies intents from the presentation layer.
///
/// Every change replaces the whole board inside a `watch` channel, so
/// subscribers only ever observe complete boards. Saving is best effort: a
/// failed save is logged and the in-memory change is kept.
pub struct BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: BoardConfig,
    state: watch::Sender<Board>,
    writes: Mutex<()>,
}

impl<R, C> BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service around an already loaded board.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>, config: BoardConfig, board: Board) -> Self {
        let (state, _) = watch::channel(board);
        Self {
            repository,
            clock,
            config,
            state,
            writes: Mutex::new(()),
        }
    }

    /// Loads the saved board, falling back to [`Board::seed`] when nothing
    /// is saved or the saved data cannot be read.
    pub async fn open(repository: Arc<R>, clock: Arc<C>, config: BoardConfig) -> Self {
        let board = match repository.load().await {
            Ok(Some(board)) => board,
            Ok(None) => {
                info!("no saved board, starting from the default board");
                Board::seed(&*clock)
            }
            Err(err) => {
                warn!(error = %err, "failed to load saved board, starting from the default board");
                Board::seed(&*clock)
            }
        };
        Self::new(repository, clock, config, board)
    }

    /// Returns the service configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns a copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.state.borrow().clone()
    }

    /// Subscribes to committed boards.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Board> {
        self.state.subscribe()
    }

    /// Returns every column with its tasks whose title contains `query`.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<(Column, Vec<Task>)> {
        let board = self.state.borrow();
        board
            .tasks_by_column(query)
            .into_iter()
            .map(|group| {
                (
                    group.column.clone(),
                    group.tasks.into_iter().cloned().collect(),
                )
            })
            .collect()
    }

    /// Appends a new column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the title is empty.
    pub async fn add_column(&self, request: CreateColumnRequest) -> BoardServiceResult<Column> {
        let column = Column::new(request.into_title()?);
        let created = column.clone();
        self.apply(move |board| board.add_column(column)).await?;
        Ok(created)
    }

    /// Renames a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the title is empty or the
    /// column does not exist.
    pub async fn rename_column(
        &self,
        column_id: ColumnId,
        title: impl Into<String>,
    ) -> BoardServiceResult<Column> {
        let column_title = ColumnTitle::new(title)?;
        let board = self
            .apply(move |board| board.rename_column(column_id, column_title))
            .await?;
        let column = board
            .column(column_id)
            .cloned()
            .ok_or(BoardDomainError::ColumnNotFound(column_id))?;
        Ok(column)
    }

    /// Deletes a column and applies the chosen disposition to its tasks in
    /// one commit.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the column is unknown or the
    /// move destination is missing or invalid; nothing is changed.
    pub async fn delete_column(&self, deletion: ColumnDeletion) -> BoardServiceResult<Board> {
        self.apply(|board| board.delete_column(&deletion)).await
    }

    /// Adds a task at the top of its column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when a field fails validation or
    /// the column does not exist.
    pub async fn add_task(&self, request: CreateTaskRequest) -> BoardServiceResult<Task> {
        let draft = request.into_draft(&self.config)?;
        let task = Task::new(draft, &*self.clock);
        let created = task.clone();
        self.apply(move |board| board.add_task(task)).await?;
        Ok(created)
    }

    /// Edits a task in place.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when a field fails validation or
    /// the task or destination column does not exist.
    pub async fn edit_task(&self, request: EditTaskRequest) -> BoardServiceResult<Task> {
        let task_id = request.task_id();
        let edit = request.into_edit(&self.config)?;
        let board = self
            .apply(|board| board.edit_task(task_id, edit, &*self.clock))
            .await?;
        Self::committed_task(&board, task_id)
    }

    /// Sets or clears a task's colour. `None` and `#FFFFFF` both clear it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the colour is malformed or
    /// the task does not exist.
    pub async fn set_task_color(
        &self,
        task_id: TaskId,
        color: Option<&str>,
    ) -> BoardServiceResult<Task> {
        let choice = match color {
            Some(raw) => TaskColor::choice(raw)?,
            None => None,
        };
        let board = self
            .apply(|board| board.set_task_color(task_id, choice, &*self.clock))
            .await?;
        Self::committed_task(&board, task_id)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the task does not exist.
    pub async fn delete_task(&self, task_id: TaskId) -> BoardServiceResult<()> {
        self.apply(|board| board.remove_task(task_id)).await?;
        Ok(())
    }

    /// Applies a drag-end event and returns the resulting board.
    ///
    /// Invalid drops are absorbed: the board is returned unchanged and
    /// nothing is saved or broadcast.
    pub async fn handle_drag_end(&self, event: DragEndEvent) -> Board {
        let _guard = self.writes.lock().await;
        match self.commit(|board| Ok(board.apply_drag_end(&event))) {
            Ok(Some(board)) => {
                self.persist(&board).await;
                board
            }
            Ok(None) | Err(_) => self.snapshot(),
        }
    }

    /// Saves the current board, surfacing any repository error.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when the save fails.
    pub async fn flush(&self) -> BoardServiceResult<()> {
        let _guard = self.writes.lock().await;
        let board = self.snapshot();
        self.repository.save(&board).await?;
        Ok(())
    }

    fn committed_task(board: &Board, task_id: TaskId) -> BoardServiceResult<Task> {
        let task = board
            .task(task_id)
            .cloned()
            .ok_or(BoardDomainError::TaskNotFound(task_id))?;
        Ok(task)
    }

    /// Commits a mutation and saves the result.
    ///
    /// The write lock is held until the save finishes, so saves land in
    /// commit order.
    async fn apply(
        &self,
        mutation: impl FnOnce(&Board) -> Result<Board, BoardDomainError>,
    ) -> BoardServiceResult<Board> {
        let _guard = self.writes.lock().await;
        match self.commit(mutation)? {
            Some(board) => {
                self.persist(&board).await;
                Ok(board)
            }
            None => Ok(self.snapshot()),
        }
    }

    /// Replaces the board with the mutation's result under the channel lock.
    ///
    /// Returns `Ok(None)` when the mutation produced an equal board; in that
    /// case subscribers are not notified.
    fn commit(
        &self,
        mutation: impl FnOnce(&Board) -> Result<Board, BoardDomainError>,
    ) -> Result<Option<Board>, BoardDomainError> {
        let mut outcome = Ok(None);
        self.state.send_if_modified(|board| match mutation(board) {
            Ok(next) if next == *board => false,
            Ok(next) => {
                *board = next.clone();
                outcome = Ok(Some(next));
                true
            }
            Err(err) => {
                outcome = Err(err);
                false
            }
        });
        if let Ok(Some(board)) = &outcome {
            debug!(
                columns = board.columns().len(),
                tasks = board.tasks().len(),
                "board committed"
            );
        }
        outcome
    }

    async fn persist(&self, board: &Board) {
        if let Err(err) = self.repository.save(board).await {
            warn!(error = %err, "failed to save board, keeping unsaved changes in memory");
        }
    }
}
