//! # board-cache
//!
//! Redis caching layer holding a bounded, best-effort mirror of the most
//! recently created messages.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Recency Cache**: a single sorted set of message snapshots ranked by
//!   creation time, trimmed to a fixed capacity on every insert
//!
//! The cache has no authority: it may be emptied or rebuilt at any time and
//! the board stays correct, only slower.
//!
//! ## Example
//!
//! ```ignore
//! use board_cache::{RecencyCache, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let cache = RecencyCache::new(pool, 10);
//!
//! cache.insert_message(&message).await?;
//! let recent = cache.list_messages(10).await?;
//! ```

pub mod pool;
pub mod recency;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export cache types
pub use recency::{CachedMessage, RecencyCache, RECENT_MESSAGES_KEY};
