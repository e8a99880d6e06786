//! Store and cache ports - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The store is the source of truth with
//! unbounded retention; the cache is a bounded, disposable mirror of the
//! most recent messages with no authority of its own.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Message, MessageDraft, NewReaction, Reaction};
use crate::error::DomainError;

/// Result type for store and cache operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Message Store (durable, authoritative)
// ============================================================================

#[async_trait]
pub trait MessageStore: Send + Sync {
    /// List messages ordered by creation time descending.
    ///
    /// An offset past the end of the data yields an empty list, not an error.
    async fn list_messages(&self, offset: i64, limit: i64) -> RepoResult<Vec<Message>>;

    /// Insert a new message. The store assigns the id and creation timestamp
    /// and returns the full persisted row.
    async fn insert_message(&self, draft: &MessageDraft) -> RepoResult<Message>;

    /// Persist a reaction and update the target message's aggregate
    /// (append the type tag, increment the score by 1) in one transaction.
    ///
    /// Concurrent calls against the same message serialize on the message
    /// row; a nonexistent target fails with `MessageNotFound` and leaves no
    /// reaction row behind.
    async fn insert_reaction_and_update_message(
        &self,
        draft: &NewReaction,
    ) -> RepoResult<Reaction>;

    /// Check that a message exists, failing with `MessageNotFound` otherwise.
    async fn find_message(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Message Cache (bounded, best-effort)
// ============================================================================

#[async_trait]
pub trait MessageCache: Send + Sync {
    /// List up to `limit` cached messages, most recent first.
    ///
    /// A short (or empty) result is valid; only backend failures are errors.
    async fn list_messages(&self, limit: i64) -> RepoResult<Vec<Message>>;

    /// Insert a message snapshot, evicting the oldest entries beyond the
    /// cache capacity.
    async fn insert_message(&self, message: &Message) -> RepoResult<()>;
}
