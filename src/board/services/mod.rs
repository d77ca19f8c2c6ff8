//! Application services for board state management.

mod board;
mod config;
mod requests;

pub use board::{BoardService, BoardServiceError, BoardServiceResult};
pub use config::BoardConfig;
pub use requests::{CreateColumnRequest, CreateTaskRequest, EditTaskRequest};
