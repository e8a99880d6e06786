//! Message entity - represents a board message and its reaction aggregate

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::ReactionType;

/// Message entity
///
/// `id` and `created_at` are assigned by the store on insert; `created_at`
/// is the authoritative ordering key for all listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub user_id: String,
    pub list_of_reactions: Vec<ReactionType>,
    pub reaction_score: i32,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Record one accepted reaction on the aggregate.
    ///
    /// Appends the type tag and increments the score by exactly 1,
    /// keeping `reaction_score == list_of_reactions.len()`.
    pub fn record_reaction(&mut self, kind: ReactionType) {
        self.list_of_reactions.push(kind);
        self.reaction_score += 1;
    }

    /// Check if message text is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Creation time as integer nanoseconds, used as the cache ranking score.
    ///
    /// Saturates for timestamps outside the i64 nanosecond range (past 2262).
    pub fn recency_score(&self) -> i64 {
        self.created_at.timestamp_nanos_opt().unwrap_or(i64::MAX)
    }
}

/// A message as submitted by a caller, before the store assigns identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub text: String,
    pub user_id: String,
}

impl MessageDraft {
    /// Create a new MessageDraft
    pub fn new(text: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user_id: user_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_message() -> Message {
        Message {
            id: Uuid::new_v4(),
            text: "hello".to_string(),
            user_id: "u1".to_string(),
            list_of_reactions: Vec::new(),
            reaction_score: 0,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_record_reaction_keeps_score_and_list_in_step() {
        let mut msg = test_message();

        msg.record_reaction(ReactionType::Like);
        msg.record_reaction(ReactionType::Wow);
        msg.record_reaction(ReactionType::Like);

        assert_eq!(msg.reaction_score, 3);
        assert_eq!(
            msg.list_of_reactions,
            vec![ReactionType::Like, ReactionType::Wow, ReactionType::Like]
        );
        assert_eq!(msg.reaction_score as usize, msg.list_of_reactions.len());
    }

    #[test]
    fn test_recency_score_orders_by_creation_time() {
        let older = test_message();
        let mut newer = test_message();
        newer.created_at = older.created_at + chrono::Duration::nanoseconds(1);

        assert!(newer.recency_score() > older.recency_score());
    }

    #[test]
    fn test_is_empty() {
        let mut msg = test_message();
        assert!(!msg.is_empty());

        msg.text = "   ".to_string();
        assert!(msg.is_empty());
    }
}
