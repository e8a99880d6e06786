//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation at the API boundary, before anything reaches the services.

use board_core::ReactionType;
use serde::Deserialize;
use validator::Validate;

/// Create message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, max = 2000, message = "Text must be 1-2000 characters"))]
    pub text: String,

    #[validate(length(min = 1, max = 64, message = "User id must be 1-64 characters"))]
    pub user_id: String,
}

/// Create reaction request
///
/// The reaction type is enum-typed, so anything outside Like/Love/Wow/Angry
/// is rejected during deserialization. The requested score defaults to 1
/// when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReactionRequest {
    pub reaction_type: ReactionType,

    #[validate(range(min = 1, message = "Reaction score must be positive"))]
    pub reaction_score: Option<i32>,

    #[validate(length(min = 1, max = 64, message = "User id must be 1-64 characters"))]
    pub user_id: String,
}
