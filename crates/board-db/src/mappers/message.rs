//! Message model -> entity mapper

use board_core::{DomainError, Message, ReactionType};

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl TryFrom<MessageModel> for Message {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        let list_of_reactions = model
            .list_of_reactions
            .iter()
            .map(|tag| tag.parse::<ReactionType>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Message {
            id: model.id,
            text: model.message_text,
            user_id: model.user_id,
            list_of_reactions,
            reaction_score: model.reaction_score,
            created_at: model.created_at,
        })
    }
}
