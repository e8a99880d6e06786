//! Message handlers
//!
//! Endpoints for listing and creating board messages.

use axum::{extract::State, Json};
use board_service::{CreateMessageRequest, MessageListResponse, MessageResponse, MessageService};

use crate::extractors::{Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List messages, newest first
///
/// GET /messages?page=N
pub async fn list_messages(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<MessageListResponse>> {
    let page_size = state.page_size();

    let service = MessageService::new(state.service_context());
    let messages = service
        .find_messages(pagination.page, pagination.offset(page_size), page_size)
        .await?;

    Ok(Json(MessageListResponse::new(messages)))
}

/// Create message
///
/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.create_message(request).await?;
    Ok(Created(Json(response)))
}
