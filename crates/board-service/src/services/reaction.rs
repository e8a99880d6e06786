//! Reaction service
//!
//! Applies a reaction to a message: one durable reaction row plus the
//! message aggregate update, committed atomically by the store.

use board_core::NewReaction;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateReactionRequest, ReactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a reaction to a message.
    ///
    /// The requested score defaults to 1 and is persisted on the reaction
    /// row as submitted; the message aggregate moves by a fixed 1 per
    /// accepted reaction regardless. The cache is deliberately not touched:
    /// cached snapshots go stale on reaction counts and the store remains
    /// the source of truth for them.
    #[instrument(skip(self, request), fields(reaction_type = %request.reaction_type))]
    pub async fn apply_reaction(
        &self,
        message_id: Uuid,
        request: CreateReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        let draft = NewReaction::new(
            message_id,
            request.reaction_type,
            request.reaction_score.unwrap_or(NewReaction::DEFAULT_SCORE),
            request.user_id,
        );

        let reaction = self
            .ctx
            .store()
            .insert_reaction_and_update_message(&draft)
            .await?;

        info!(
            message_id = %message_id,
            reaction_id = %reaction.id,
            "Reaction applied"
        );

        Ok(ReactionResponse::from(reaction))
    }
}
