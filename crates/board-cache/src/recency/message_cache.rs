//! Recency cache backed by a single Redis sorted set.
//!
//! Members are JSON snapshots of messages taken at insertion time; the sort
//! score is the creation timestamp in nanoseconds, so ZREVRANGE yields
//! most-recent-first. Every insert trims the set back to its capacity,
//! evicting the lowest-ranked (oldest) entries. Snapshots are never updated
//! when a message's reaction aggregate changes; the store stays the source
//! of truth for mutable fields.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use board_core::{DomainError, Message, MessageCache, ReactionType, RepoResult};

use crate::pool::{RedisPool, RedisPoolError};

/// Sorted set holding the recent-message snapshots
pub const RECENT_MESSAGES_KEY: &str = "board:messages:recent";

/// Message snapshot as serialized into the sorted set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedMessage {
    pub id: Uuid,
    pub text: String,
    pub user_id: String,
    pub reaction_score: i32,
    pub list_of_reactions: Vec<ReactionType>,
    pub created_at: DateTime<Utc>,
}

impl From<&Message> for CachedMessage {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            text: message.text.clone(),
            user_id: message.user_id.clone(),
            reaction_score: message.reaction_score,
            list_of_reactions: message.list_of_reactions.clone(),
            created_at: message.created_at,
        }
    }
}

impl From<CachedMessage> for Message {
    fn from(cached: CachedMessage) -> Self {
        Message {
            id: cached.id,
            text: cached.text,
            user_id: cached.user_id,
            list_of_reactions: cached.list_of_reactions,
            reaction_score: cached.reaction_score,
            created_at: cached.created_at,
        }
    }
}

/// Bounded recency cache over one Redis sorted set
#[derive(Clone)]
pub struct RecencyCache {
    pool: RedisPool,
    capacity: usize,
}

impl RecencyCache {
    /// Create a new RecencyCache holding at most `capacity` entries
    #[must_use]
    pub fn new(pool: RedisPool, capacity: usize) -> Self {
        Self { pool, capacity }
    }

    /// Maximum number of entries retained
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn map_cache_error(e: RedisPoolError) -> DomainError {
        DomainError::CacheError(e.to_string())
    }
}

impl std::fmt::Debug for RecencyCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecencyCache")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[async_trait]
impl MessageCache for RecencyCache {
    #[instrument(skip(self))]
    async fn list_messages(&self, limit: i64) -> RepoResult<Vec<Message>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get().await.map_err(Self::map_cache_error)?;

        let members: Vec<String> = conn
            .zrevrange(RECENT_MESSAGES_KEY, 0, (limit - 1) as isize)
            .await
            .map_err(|e| Self::map_cache_error(e.into()))?;

        let mut messages = Vec::with_capacity(members.len());
        for member in members {
            let cached: CachedMessage = serde_json::from_str(&member)
                .map_err(|e| Self::map_cache_error(e.into()))?;
            messages.push(Message::from(cached));
        }

        Ok(messages)
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn insert_message(&self, message: &Message) -> RepoResult<()> {
        let snapshot = serde_json::to_string(&CachedMessage::from(message))
            .map_err(|e| Self::map_cache_error(e.into()))?;

        let mut conn = self.pool.get().await.map_err(Self::map_cache_error)?;

        conn.zadd::<_, _, _, ()>(RECENT_MESSAGES_KEY, snapshot, message.recency_score())
            .await
            .map_err(|e| Self::map_cache_error(e.into()))?;

        // Keep only the `capacity` highest-ranked (newest) entries.
        let cutoff = -(self.capacity as isize) - 1;
        conn.zremrangebyrank::<_, ()>(RECENT_MESSAGES_KEY, 0, cutoff)
            .await
            .map_err(|e| Self::map_cache_error(e.into()))?;

        tracing::debug!(
            message_id = %message.id,
            capacity = self.capacity,
            "Cached message snapshot"
        );

        Ok(())
    }
}
