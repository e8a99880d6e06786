//! Service context - dependency container for services
//!
//! Holds the store and cache ports plus the shared connection pools needed
//! by services and health probes.

use std::sync::Arc;

use board_cache::SharedRedisPool;
use board_core::{MessageCache, MessageStore};
use board_db::PgPool;

/// Service context containing all dependencies
///
/// This is the dependency container passed to all services. It provides
/// access to:
/// - The durable message store port (PostgreSQL behind it in production)
/// - The recency cache port (Redis behind it in production)
/// - The raw connection pools, for health probes
/// - The configured page size (also the cache capacity)
#[derive(Clone)]
pub struct ServiceContext {
    // Connection pools
    pool: PgPool,
    redis_pool: SharedRedisPool,

    // Ports
    store: Arc<dyn MessageStore>,
    cache: Arc<dyn MessageCache>,

    // Pagination
    page_size: i64,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        store: Arc<dyn MessageStore>,
        cache: Arc<dyn MessageCache>,
        page_size: i64,
    ) -> Self {
        Self {
            pool,
            redis_pool,
            store,
            cache,
            page_size,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    /// Get the durable message store
    pub fn store(&self) -> &dyn MessageStore {
        self.store.as_ref()
    }

    /// Get the recency cache
    pub fn cache(&self) -> &dyn MessageCache {
        self.cache.as_ref()
    }

    /// Get the configured page size
    pub fn page_size(&self) -> i64 {
        self.page_size
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("page_size", &self.page_size)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    store: Option<Arc<dyn MessageStore>>,
    cache: Option<Arc<dyn MessageCache>>,
    page_size: Option<i64>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            store: None,
            cache: None,
            page_size: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn store(mut self, store: Arc<dyn MessageStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn cache(mut self, cache: Arc<dyn MessageCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            self.store
                .ok_or_else(|| ServiceError::validation("store is required"))?,
            self.cache
                .ok_or_else(|| ServiceError::validation("cache is required"))?,
            self.page_size
                .ok_or_else(|| ServiceError::validation("page_size is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
