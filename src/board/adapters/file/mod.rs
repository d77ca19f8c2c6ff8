//! JSON file board persistence.
//!
//! The board is written as a versioned, checksummed envelope so that partial
//! or hand-edited files are detected and reported as corrupt instead of being
//! loaded.

mod envelope;
mod repository;

pub use envelope::SCHEMA_VERSION;
pub use repository::JsonFileBoardRepository;
