//! Versioned on-disk envelope around a serialized board.

use crate::board::{
    domain::Board,
    ports::{BoardRepositoryError, BoardRepositoryResult},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Schema version written by this crate.
pub const SCHEMA_VERSION: u32 = 1;

/// File contents: schema version, SHA-256 of the board JSON, and the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct BoardEnvelope {
    schema_version: u32,
    checksum: String,
    board: Value,
}

impl BoardEnvelope {
    /// Wraps a board for writing.
    pub(super) fn seal(board: &Board) -> Result<Self, serde_json::Error> {
        let board_value = serde_json::to_value(board)?;
        let checksum = checksum(&board_value)?;
        Ok(Self {
            schema_version: SCHEMA_VERSION,
            checksum,
            board: board_value,
        })
    }

    /// Verifies and decodes the wrapped board.
    pub(super) fn open(self) -> BoardRepositoryResult<Board> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(BoardRepositoryError::UnsupportedSchema(self.schema_version));
        }
        let expected = checksum(&self.board).map_err(BoardRepositoryError::corrupt)?;
        if expected != self.checksum {
            return Err(BoardRepositoryError::corrupt("checksum mismatch"));
        }
        serde_json::from_value(self.board).map_err(BoardRepositoryError::corrupt)
    }
}

/// Hex SHA-256 of the compact JSON encoding. `Value` objects keep their keys
/// sorted, so the encoding is stable across writes.
fn checksum(value: &Value) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(value)?;
    let digest = Sha256::digest(&bytes);
    Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
}
