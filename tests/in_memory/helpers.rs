//! Shared helpers for in-memory board integration tests.

use std::sync::Arc;

use kanban_board::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Board, Column, ColumnId, Task},
    services::{BoardConfig, BoardService, CreateColumnRequest, CreateTaskRequest},
};
use mockable::DefaultClock;

/// Service type used by the in-memory integration tests.
pub type TestService = BoardService<InMemoryBoardRepository, DefaultClock>;

/// Creates a service over an empty board and returns its repository.
pub fn empty_service() -> (TestService, Arc<InMemoryBoardRepository>) {
    let repository = Arc::new(InMemoryBoardRepository::new());
    let service = BoardService::new(
        Arc::clone(&repository),
        Arc::new(DefaultClock),
        BoardConfig::default(),
        Board::empty(),
    );
    (service, repository)
}

/// Adds a column with `titles` listed top to bottom.
pub async fn column_with_tasks(
    service: &TestService,
    column_title: &str,
    titles: &[&str],
) -> (Column, Vec<Task>) {
    let column = service
        .add_column(CreateColumnRequest::new(column_title))
        .await
        .expect("column should be added");
    let mut tasks = Vec::with_capacity(titles.len());
    for title in titles.iter().rev() {
        let task = service
            .add_task(CreateTaskRequest::new(column.id(), *title))
            .await
            .expect("task should be added");
        tasks.push(task);
    }
    tasks.reverse();
    (column, tasks)
}

/// Titles of a column's tasks in display order.
pub fn titles_in(board: &Board, column: ColumnId) -> Vec<String> {
    board
        .tasks_in_column(column)
        .map(|task| task.title().as_str().to_owned())
        .collect()
}
