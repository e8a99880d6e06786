//! PostgreSQL connection pool

mod postgres;

pub use postgres::{create_pool, create_pool_from_env, DatabaseConfig};

/// Re-export of the SQLx pool type used throughout the workspace
pub use sqlx::PgPool;
