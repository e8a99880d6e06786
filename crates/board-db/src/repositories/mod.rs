//! Store implementations
//!
//! PostgreSQL implementation of the `MessageStore` port defined in board-core.

mod error;
mod message;

pub use message::PgMessageStore;
