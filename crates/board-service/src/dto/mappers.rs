//! Entity -> response mappers

use board_core::{Message, Reaction};

use super::responses::{MessageResponse, ReactionResponse};

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            text: message.text,
            user_id: message.user_id,
            list_of_reactions: message.list_of_reactions,
            reaction_score: message.reaction_score,
            created_at: message.created_at,
        }
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self {
            id: reaction.id.to_string(),
            message_id: reaction.message_id.to_string(),
            reaction_type: reaction.reaction_type,
            reaction_score: reaction.reaction_score,
            user_id: reaction.user_id,
            created_at: reaction.created_at,
        }
    }
}
