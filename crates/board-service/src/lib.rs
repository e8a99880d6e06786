//! # board-service
//!
//! Application layer containing business logic, services, and DTOs: the
//! cache/store pagination merger, the write-through message create path, and
//! reaction application.

pub mod dto;
pub mod services;

pub use dto::{
    CreateMessageRequest, CreateReactionRequest, HealthResponse, MessageListResponse,
    MessageResponse, ReactionResponse, ReadinessResponse,
};
pub use services::{
    MessageService, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
