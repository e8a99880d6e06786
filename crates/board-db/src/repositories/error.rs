//! Error handling utilities for the store

use board_core::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert a SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign key violation to a caller-supplied error, with a database
/// error fallback for anything else.
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "message not found" error
pub fn message_not_found(id: Uuid) -> DomainError {
    DomainError::MessageNotFound(id)
}
