//! Kanban board engine.
//!
//! This crate provides the state core of a local-first Kanban board: columns
//! ("lists"), task cards with colour and priority metadata, drag-and-drop
//! reordering within and across columns, and column deletion with an explicit
//! task disposition.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (memory, JSON file)
//!
//! # Modules
//!
//! - [`board`]: Board model, reordering engine, persistence, and the board
//!   service
pub mod board;
