//! # board-db
//!
//! Database layer implementing the `MessageStore` port with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the durable, authoritative side of the board:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - The `PgMessageStore` port implementation, including the transactional
//!   reaction apply
//! - Embedded migrations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use board_db::pool::{create_pool, DatabaseConfig};
//! use board_db::PgMessageStore;
//! use board_core::MessageStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     board_db::run_migrations(&pool).await?;
//!     let store = PgMessageStore::new(pool);
//!
//!     // Use the store...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::PgMessageStore;

/// Embedded schema files, applied in order at startup.
///
/// Every statement is idempotent (IF NOT EXISTS), so re-running on an
/// existing database is a no-op.
const MIGRATIONS: &[&str] = &[
    include_str!("../migrations/0001_create_messages.sql"),
    include_str!("../migrations/0002_create_reactions.sql"),
];

/// Apply the board schema
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    for sql in MIGRATIONS {
        sqlx::raw_sql(sql).execute(pool).await?;
    }
    Ok(())
}
