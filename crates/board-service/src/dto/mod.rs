//! Data transfer objects
//!
//! Request DTOs (Deserialize + Validate) and response DTOs (Serialize) for
//! the API surface, plus entity -> response mappers.

mod mappers;
mod requests;
mod responses;

pub use requests::{CreateMessageRequest, CreateReactionRequest};
pub use responses::{
    HealthResponse, MessageListResponse, MessageResponse, ReactionResponse, ReadinessResponse,
};
