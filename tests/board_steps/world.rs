//! Shared world state for board BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use kanban_board::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{Board, ColumnId, TaskId},
    services::{BoardConfig, BoardService, BoardServiceError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryBoardRepository, DefaultClock>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub service: TestBoardService,
    pub columns: HashMap<String, ColumnId>,
    pub tasks: HashMap<String, TaskId>,
    pub board_before_action: Option<Board>,
    pub last_error: Option<BoardServiceError>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        let service = BoardService::new(
            Arc::new(InMemoryBoardRepository::new()),
            Arc::new(DefaultClock),
            BoardConfig::default(),
            Board::empty(),
        );

        Self {
            service,
            columns: HashMap::new(),
            tasks: HashMap::new(),
            board_before_action: None,
            last_error: None,
        }
    }

    /// Resolves a column name used in the scenario.
    pub fn column(&self, name: &str) -> Result<ColumnId, eyre::Report> {
        self.columns
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown column \"{name}\" in scenario"))
    }

    /// Resolves a task title used in the scenario.
    pub fn task(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("unknown task \"{title}\" in scenario"))
    }

    /// Titles of a column's tasks in display order.
    pub fn titles_in(&self, name: &str) -> Result<Vec<String>, eyre::Report> {
        let column = self.column(name)?;
        Ok(self
            .service
            .snapshot()
            .tasks_in_column(column)
            .map(|task| task.title().as_str().to_owned())
            .collect())
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Splits a comma-separated list of titles from a step.
pub fn title_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
