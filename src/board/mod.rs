//! Kanban board state management.
//!
//! Columns hold tasks; tasks are reordered and moved between columns by
//! drag-and-drop, and columns can be deleted together with, or without, their
//! tasks. The module follows hexagonal architecture:
//!
//! - Domain types and the pure reordering engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The board state container in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
