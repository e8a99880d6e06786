//! Recency cache - bounded mirror of the newest messages

mod message_cache;

pub use message_cache::{CachedMessage, RecencyCache, RECENT_MESSAGES_KEY};
