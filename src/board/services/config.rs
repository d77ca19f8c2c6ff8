//! Board service configuration.

use crate::board::domain::{Priority, TaskDescription};

/// Tunables for the board service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Maximum task description length in characters. Values above
    /// [`TaskDescription::DEFAULT_LIMIT`] are capped to it, since saved
    /// boards reject longer descriptions.
    pub description_limit: usize,
    /// Priority given to new tasks that do not specify one.
    pub default_priority: Option<Priority>,
    /// Namespace under which adapters store the board.
    pub storage_key: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            description_limit: TaskDescription::DEFAULT_LIMIT,
            default_priority: Some(Priority::Medium),
            storage_key: Self::DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl BoardConfig {
    /// Storage key used unless configured otherwise.
    pub const DEFAULT_STORAGE_KEY: &'static str = "kanban_board_v1";

    /// Creates a configuration with short descriptions and no implicit
    /// priority.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            description_limit: 140,
            default_priority: None,
            ..Default::default()
        }
    }

    /// Sets the description limit.
    #[must_use]
    pub fn with_description_limit(mut self, limit: usize) -> Self {
        self.description_limit = limit;
        self
    }

    /// Returns the limit applied to incoming descriptions.
    #[must_use]
    pub fn effective_description_limit(&self) -> usize {
        self.description_limit.min(TaskDescription::DEFAULT_LIMIT)
    }

    /// Sets the default priority for new tasks.
    #[must_use]
    pub fn with_default_priority(mut self, priority: Option<Priority>) -> Self {
        self.default_priority = priority;
        self
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
