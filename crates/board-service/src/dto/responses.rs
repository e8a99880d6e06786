//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Uuid values are serialized as strings for JavaScript compatibility.

use board_core::ReactionType;
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Message Responses
// ============================================================================

/// A message as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub list_of_reactions: Vec<ReactionType>,
    pub reaction_score: i32,
    pub created_at: DateTime<Utc>,
}

/// Paginated message listing
#[derive(Debug, Clone, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
}

impl MessageListResponse {
    pub fn new(messages: Vec<MessageResponse>) -> Self {
        Self { messages }
    }
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// A reaction as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: String,
    pub message_id: String,
    pub reaction_type: ReactionType,
    pub reaction_score: i32,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
    pub cache: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool, cache: bool) -> Self {
        Self {
            status: if database && cache { "ready" } else { "degraded" },
            database,
            cache,
        }
    }
}
