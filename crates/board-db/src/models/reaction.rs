//! Reaction database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: Uuid,
    pub message_id: Uuid,
    pub user_id: String,
    pub reaction_type: String,
    pub reaction_score: i32,
    pub created_at: DateTime<Utc>,
}
