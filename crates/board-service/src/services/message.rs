//! Message service
//!
//! Assembles paginated listings from the cache and the store, and handles
//! message creation with the write-through cache mirror.

use board_core::MessageDraft;
use tracing::{info, instrument, warn};

use crate::dto::{CreateMessageRequest, MessageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List one page of messages, newest first.
    ///
    /// The first page is served from the recency cache, falling back to the
    /// store for any shortfall: the cache's most-recent-first content is a
    /// prefix of the store's globally ordered sequence as long as every
    /// insert goes through the write-through path, so the store fetch starts
    /// at `offset = cached.len()` and the two halves concatenate without
    /// duplicates or gaps. Later pages bypass the cache entirely and read
    /// the store at the caller-computed offset.
    ///
    /// A cache read failure on the first page is a hard failure; there is no
    /// way to resume the merge without risking duplicated or skipped rows.
    #[instrument(skip(self))]
    pub async fn find_messages(
        &self,
        page_number: i64,
        offset: i64,
        page_size: i64,
    ) -> ServiceResult<Vec<MessageResponse>> {
        if page_number == 1 {
            let cached = self.ctx.cache().list_messages(page_size).await?;
            if cached.len() as i64 == page_size {
                return Ok(cached.into_iter().map(MessageResponse::from).collect());
            }

            let remaining = page_size - cached.len() as i64;
            info!(
                cached = cached.len(),
                remaining, "Partial first page in cache, fetching remainder from store"
            );

            let from_store = self
                .ctx
                .store()
                .list_messages(cached.len() as i64, remaining)
                .await?;

            return Ok(cached
                .into_iter()
                .chain(from_store)
                .map(MessageResponse::from)
                .collect());
        }

        let from_store = self.ctx.store().list_messages(offset, page_size).await?;
        Ok(from_store.into_iter().map(MessageResponse::from).collect())
    }

    /// Create a message.
    ///
    /// The store write is authoritative and must succeed; the cache mirror
    /// of the returned row is best-effort and a mirror failure only degrades
    /// cache freshness, so it is logged and swallowed.
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create_message(
        &self,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let draft = MessageDraft::new(request.text, request.user_id);
        let message = self.ctx.store().insert_message(&draft).await?;

        info!(message_id = %message.id, "Message created");

        if let Err(e) = self.ctx.cache().insert_message(&message).await {
            warn!(message_id = %message.id, error = %e, "Could not cache message");
        }

        Ok(MessageResponse::from(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{test_context, InMemoryCache, InMemoryStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_first_page_merges_cache_prefix_with_store_tail() {
        // Store holds m1..m20 (newest first); cache mirrors only m1..m7.
        let store = Arc::new(InMemoryStore::with_messages(20));
        let cache = Arc::new(InMemoryCache::mirroring(&store, 7));
        let ctx = test_context(store.clone(), cache);
        let service = MessageService::new(&ctx);

        let page = service.find_messages(1, 0, 10).await.unwrap();

        let expected: Vec<String> = store.newest_ids(10).iter().map(ToString::to_string).collect();
        let got: Vec<String> = page.iter().map(|m| m.id.clone()).collect();
        assert_eq!(got, expected, "cache prefix + store tail must equal the store's first page");

        // No duplicates across the merge boundary.
        let mut deduped = got.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), 10);

        // Strictly descending recency across the boundary.
        for pair in page.windows(2) {
            assert!(pair[0].created_at > pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn test_first_page_served_from_cache_alone_when_full() {
        let store = Arc::new(InMemoryStore::with_messages(20));
        let cache = Arc::new(InMemoryCache::mirroring(&store, 10));
        let ctx = test_context(store.clone(), cache);
        let service = MessageService::new(&ctx);

        let page = service.find_messages(1, 0, 10).await.unwrap();

        assert_eq!(page.len(), 10);
        assert_eq!(store.list_calls(), 0, "full cache page must not touch the store");
    }

    #[tokio::test]
    async fn test_later_pages_bypass_the_cache() {
        let store = Arc::new(InMemoryStore::with_messages(25));
        let cache = Arc::new(InMemoryCache::mirroring(&store, 10));
        let ctx = test_context(store.clone(), cache.clone());
        let service = MessageService::new(&ctx);

        let page = service.find_messages(2, 10, 10).await.unwrap();

        assert_eq!(cache.list_calls(), 0, "page 2 must not consult the cache");
        let expected: Vec<String> = store.ids_at(10, 10).iter().map(ToString::to_string).collect();
        let got: Vec<String> = page.iter().map(|m| m.id.clone()).collect();
        assert_eq!(got, expected);
    }

    #[tokio::test]
    async fn test_offset_past_end_yields_empty_page() {
        let store = Arc::new(InMemoryStore::with_messages(5));
        let cache = Arc::new(InMemoryCache::new(10));
        let ctx = test_context(store, cache);
        let service = MessageService::new(&ctx);

        let page = service.find_messages(3, 20, 10).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_short_board_returns_everything_available() {
        // 4 messages total, 3 of them cached: page 1 is all 4, no more.
        let store = Arc::new(InMemoryStore::with_messages(4));
        let cache = Arc::new(InMemoryCache::mirroring(&store, 3));
        let ctx = test_context(store, cache);
        let service = MessageService::new(&ctx);

        let page = service.find_messages(1, 0, 10).await.unwrap();
        assert_eq!(page.len(), 4);
    }

    #[tokio::test]
    async fn test_cache_read_failure_on_first_page_is_fatal() {
        let store = Arc::new(InMemoryStore::with_messages(5));
        let cache = Arc::new(InMemoryCache::new(10));
        cache.fail_reads();
        let ctx = test_context(store, cache);
        let service = MessageService::new(&ctx);

        let err = service.find_messages(1, 0, 10).await.unwrap_err();
        assert_eq!(err.error_code(), "CACHE_ERROR");
    }

    #[tokio::test]
    async fn test_create_message_survives_cache_write_failure() {
        let store = Arc::new(InMemoryStore::new());
        let cache = Arc::new(InMemoryCache::new(10));
        cache.fail_writes();
        let ctx = test_context(store.clone(), cache.clone());
        let service = MessageService::new(&ctx);

        let created = service
            .create_message(CreateMessageRequest {
                text: "hello".to_string(),
                user_id: "u1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.text, "hello");
        assert_eq!(created.reaction_score, 0);

        // The store row exists even though the mirror write failed, so the
        // message still appears on the next first-page read via fallback.
        cache.clear();
        let page = service.find_messages(1, 0, 10).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_message_mirrors_into_cache() {
        let store = Arc::new(InMemoryStore::new());
        let cache = Arc::new(InMemoryCache::new(10));
        let ctx = test_context(store, cache.clone());
        let service = MessageService::new(&ctx);

        let created = service
            .create_message(CreateMessageRequest {
                text: "mirrored".to_string(),
                user_id: "u1".to_string(),
            })
            .await
            .unwrap();

        let cached = cache.snapshot();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].id.to_string(), created.id);
    }

    #[tokio::test]
    async fn test_cache_capacity_evicts_oldest() {
        let store = Arc::new(InMemoryStore::new());
        let cache = Arc::new(InMemoryCache::new(3));
        let ctx = test_context(store, cache.clone());
        let service = MessageService::new(&ctx);

        for i in 0..4 {
            service
                .create_message(CreateMessageRequest {
                    text: format!("msg {i}"),
                    user_id: "u1".to_string(),
                })
                .await
                .unwrap();
        }

        let cached = cache.snapshot();
        assert_eq!(cached.len(), 3, "capacity-3 cache keeps only 3 entries");
        assert_eq!(cached[0].text, "msg 3", "newest entry first");
        assert!(
            cached.iter().all(|m| m.text != "msg 0"),
            "oldest entry must have been evicted"
        );
    }
}
