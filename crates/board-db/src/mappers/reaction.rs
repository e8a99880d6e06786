//! Reaction model -> entity mapper

use board_core::{DomainError, Reaction, ReactionType};

use crate::models::ReactionModel;

/// Convert ReactionModel to Reaction entity
impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        let reaction_type = model.reaction_type.parse::<ReactionType>()?;

        Ok(Reaction {
            id: model.id,
            message_id: model.message_id,
            reaction_type,
            reaction_score: model.reaction_score,
            user_id: model.user_id,
            created_at: model.created_at,
        })
    }
}
