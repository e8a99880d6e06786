//! In-memory port implementations for service tests.
//!
//! `InMemoryStore` serializes its read-modify-write under one mutex, which
//! stands in for the store's row-level locking; `InMemoryCache` is a plain
//! bounded vector with switchable read/write failure injection.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use board_cache::{RedisPool, RedisPoolConfig};
use board_core::{
    DomainError, Message, MessageCache, MessageDraft, MessageStore, NewReaction, Reaction,
    RepoResult,
};

use super::context::ServiceContext;

/// Build a ServiceContext around test ports.
///
/// The pools are created lazily and never touched by the in-memory ports.
pub(crate) fn test_context(
    store: Arc<dyn MessageStore>,
    cache: Arc<dyn MessageCache>,
) -> ServiceContext {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost:5432/board_test")
        .expect("lazy pool");
    let redis_pool = Arc::new(RedisPool::new(RedisPoolConfig::default()).expect("redis pool"));
    ServiceContext::new(pool, redis_pool, store, cache, 10)
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

#[derive(Default)]
struct StoreInner {
    messages: Vec<Message>,
    reactions: Vec<Reaction>,
}

/// In-memory MessageStore
#[derive(Default)]
pub(crate) struct InMemoryStore {
    inner: Mutex<StoreInner>,
    list_calls: AtomicUsize,
}

impl InMemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seed `count` messages with strictly increasing creation times, so the
    /// last one seeded is the newest.
    pub(crate) fn with_messages(count: usize) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().unwrap();
            for i in 0..count {
                inner.messages.push(Message {
                    id: Uuid::new_v4(),
                    text: format!("message {i}"),
                    user_id: format!("user_{}", i % 3),
                    list_of_reactions: Vec::new(),
                    reaction_score: 0,
                    created_at: base_time() + Duration::seconds(i as i64),
                });
            }
        }
        store
    }

    fn sorted_desc(inner: &StoreInner) -> Vec<Message> {
        let mut messages = inner.messages.clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }

    /// Ids of the `count` newest messages, newest first
    pub(crate) fn newest_ids(&self, count: usize) -> Vec<Uuid> {
        self.ids_at(0, count)
    }

    /// Ids of `count` messages starting at `offset` in newest-first order
    pub(crate) fn ids_at(&self, offset: usize, count: usize) -> Vec<Uuid> {
        let inner = self.inner.lock().unwrap();
        Self::sorted_desc(&inner)
            .into_iter()
            .skip(offset)
            .take(count)
            .map(|m| m.id)
            .collect()
    }

    pub(crate) fn get(&self, id: Uuid) -> Option<Message> {
        let inner = self.inner.lock().unwrap();
        inner.messages.iter().find(|m| m.id == id).cloned()
    }

    pub(crate) fn reaction_count(&self) -> usize {
        self.inner.lock().unwrap().reactions.len()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageStore for InMemoryStore {
    async fn list_messages(&self, offset: i64, limit: i64) -> RepoResult<Vec<Message>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.lock().unwrap();
        Ok(Self::sorted_desc(&inner)
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn insert_message(&self, draft: &MessageDraft) -> RepoResult<Message> {
        let mut inner = self.inner.lock().unwrap();
        let newest = inner
            .messages
            .iter()
            .map(|m| m.created_at)
            .max()
            .unwrap_or_else(base_time);
        let message = Message {
            id: Uuid::new_v4(),
            text: draft.text.clone(),
            user_id: draft.user_id.clone(),
            list_of_reactions: Vec::new(),
            reaction_score: 0,
            created_at: newest + Duration::seconds(1),
        };
        inner.messages.push(message.clone());
        Ok(message)
    }

    async fn insert_reaction_and_update_message(
        &self,
        draft: &NewReaction,
    ) -> RepoResult<Reaction> {
        let mut inner = self.inner.lock().unwrap();

        let created_at = inner
            .messages
            .iter()
            .map(|m| m.created_at)
            .max()
            .unwrap_or_else(base_time)
            + Duration::seconds(1);

        let Some(message) = inner.messages.iter_mut().find(|m| m.id == draft.message_id)
        else {
            return Err(DomainError::MessageNotFound(draft.message_id));
        };
        message.record_reaction(draft.reaction_type);

        let reaction = Reaction {
            id: Uuid::new_v4(),
            message_id: draft.message_id,
            reaction_type: draft.reaction_type,
            reaction_score: draft.reaction_score,
            user_id: draft.user_id.clone(),
            created_at,
        };
        inner.reactions.push(reaction.clone());
        Ok(reaction)
    }

    async fn find_message(&self, id: Uuid) -> RepoResult<()> {
        self.get(id)
            .map(|_| ())
            .ok_or(DomainError::MessageNotFound(id))
    }
}

/// In-memory MessageCache with failure injection
pub(crate) struct InMemoryCache {
    entries: Mutex<Vec<Message>>,
    capacity: usize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    list_calls: AtomicUsize,
}

impl InMemoryCache {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            capacity,
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Create a cache pre-populated with the `count` newest store messages
    pub(crate) fn mirroring(store: &InMemoryStore, count: usize) -> Self {
        let cache = Self::new(count.max(1));
        {
            let mut entries = cache.entries.lock().unwrap();
            let inner = store.inner.lock().unwrap();
            *entries = InMemoryStore::sorted_desc(&inner)
                .into_iter()
                .take(count)
                .collect();
        }
        cache
    }

    pub(crate) fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub(crate) fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    /// Current entries, newest first
    pub(crate) fn snapshot(&self) -> Vec<Message> {
        self.entries.lock().unwrap().clone()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageCache for InMemoryCache {
    async fn list_messages(&self, limit: i64) -> RepoResult<Vec<Message>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("injected read failure".to_string()));
        }
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .iter()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn insert_message(&self, message: &Message) -> RepoResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError(
                "injected write failure".to_string(),
            ));
        }
        let mut entries = self.entries.lock().unwrap();
        entries.push(message.clone());
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(self.capacity);
        Ok(())
    }
}
