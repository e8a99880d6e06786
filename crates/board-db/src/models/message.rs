//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the messages table
///
/// Reaction tags are stored as a `text[]` column; the mapper parses them
/// back into the domain enum.
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: Uuid,
    pub message_text: String,
    pub user_id: String,
    pub reaction_score: i32,
    pub list_of_reactions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl MessageModel {
    /// Check if the message has any reactions
    #[inline]
    pub fn has_reactions(&self) -> bool {
        !self.list_of_reactions.is_empty()
    }
}
