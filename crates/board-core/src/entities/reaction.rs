//! Reaction entity - a single reaction submitted against a message

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ReactionType;

/// Reaction entity
///
/// Immutable once created; the store assigns `id` and `created_at`.
/// `reaction_score` is the caller-requested score, persisted verbatim.
/// The message aggregate is incremented by a fixed 1 per reaction
/// independently of this field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Uuid,
    pub message_id: Uuid,
    pub reaction_type: ReactionType,
    pub reaction_score: i32,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// A reaction as submitted by a caller, before the store assigns identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub message_id: Uuid,
    pub reaction_type: ReactionType,
    pub reaction_score: i32,
    pub user_id: String,
}

impl NewReaction {
    /// Default requested score when the caller omits one
    pub const DEFAULT_SCORE: i32 = 1;

    /// Create a new NewReaction with an explicit requested score
    pub fn new(
        message_id: Uuid,
        reaction_type: ReactionType,
        reaction_score: i32,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            message_id,
            reaction_type,
            reaction_score,
            user_id: user_id.into(),
        }
    }

    /// Create a new NewReaction with the default requested score
    pub fn with_default_score(
        message_id: Uuid,
        reaction_type: ReactionType,
        user_id: impl Into<String>,
    ) -> Self {
        Self::new(message_id, reaction_type, Self::DEFAULT_SCORE, user_id)
    }
}
