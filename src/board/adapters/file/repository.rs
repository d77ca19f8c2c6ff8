//! Board repository backed by a JSON file in a capability directory.

use super::envelope::BoardEnvelope;
use crate::board::{
    domain::Board,
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;
use tracing::debug;

/// Stores the board in `<storage_key>.json` inside one directory.
#[derive(Debug)]
pub struct JsonFileBoardRepository {
    dir: Dir,
    file_name: String,
}

impl JsonFileBoardRepository {
    /// Opens (creating if needed) `path` and stores the board under
    /// `storage_key`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when the directory cannot
    /// be created or opened, or when `storage_key` is not a plain file name.
    pub fn open(path: &Utf8Path, storage_key: &str) -> BoardRepositoryResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(BoardRepositoryError::persistence)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(BoardRepositoryError::persistence)?;
        Self::from_dir(dir, storage_key)
    }

    /// Stores the board under `storage_key` inside an already opened
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::Persistence`] when `storage_key` is
    /// empty or contains a path separator.
    pub fn from_dir(dir: Dir, storage_key: &str) -> BoardRepositoryResult<Self> {
        let key = storage_key.trim();
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(BoardRepositoryError::persistence(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("invalid storage key '{storage_key}'"),
            )));
        }
        Ok(Self {
            dir,
            file_name: format!("{key}.json"),
        })
    }

    /// Returns the name of the board file inside the directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    fn temp_file_name(&self) -> String {
        format!("{}.tmp", self.file_name)
    }
}

#[async_trait]
impl BoardRepository for JsonFileBoardRepository {
    async fn load(&self) -> BoardRepositoryResult<Option<Board>> {
        let contents = match self.dir.read_to_string(self.file_name.as_str()) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(file = %self.file_name, "no saved board");
                return Ok(None);
            }
            Err(err) => return Err(BoardRepositoryError::persistence(err)),
        };
        let envelope: BoardEnvelope =
            serde_json::from_str(&contents).map_err(BoardRepositoryError::corrupt)?;
        envelope.open().map(Some)
    }

    async fn save(&self, board: &Board) -> BoardRepositoryResult<()> {
        let envelope = BoardEnvelope::seal(board).map_err(BoardRepositoryError::persistence)?;
        let bytes =
            serde_json::to_vec_pretty(&envelope).map_err(BoardRepositoryError::persistence)?;
        let temp_name = self.temp_file_name();
        self.dir
            .write(temp_name.as_str(), bytes)
            .map_err(BoardRepositoryError::persistence)?;
        self.dir
            .rename(temp_name.as_str(), &self.dir, self.file_name.as_str())
            .map_err(BoardRepositoryError::persistence)?;
        debug!(file = %self.file_name, tasks = board.tasks().len(), "board saved");
        Ok(())
    }
}
