//! Route definitions
//!
//! All API routes mounted under /api/v1, plus unversioned health probes.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, messages, reactions};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (unversioned, bypass API middleware concerns)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", get(messages::list_messages))
        .route("/messages", post(messages::create_message))
        .route("/messages/:message_id/reactions", post(reactions::create_reaction))
}
