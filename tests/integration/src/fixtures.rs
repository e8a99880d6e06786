//! Test fixtures and data generators
//!
//! Provides reusable request/response mirrors for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create message request
#[derive(Debug, Serialize)]
pub struct CreateMessageRequest {
    pub text: String,
    pub user_id: String,
}

impl CreateMessageRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            text: format!("integration message {suffix}"),
            user_id: format!("it_user_{suffix}"),
        }
    }
}

/// Create reaction request
#[derive(Debug, Serialize)]
pub struct CreateReactionRequest {
    pub reaction_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_score: Option<i32>,
    pub user_id: String,
}

impl CreateReactionRequest {
    pub fn like() -> Self {
        Self {
            reaction_type: "Like".to_string(),
            reaction_score: None,
            user_id: format!("it_reactor_{}", unique_suffix()),
        }
    }
}

/// Message response mirror
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub list_of_reactions: Vec<String>,
    pub reaction_score: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Message list response mirror
#[derive(Debug, Deserialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
}

/// Reaction response mirror
#[derive(Debug, Deserialize)]
pub struct ReactionResponse {
    pub id: String,
    pub message_id: String,
    pub reaction_type: String,
    pub reaction_score: i32,
    pub user_id: String,
}

/// Error body mirror
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail mirror
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
