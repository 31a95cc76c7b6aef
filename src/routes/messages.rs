use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::models::Message;
use crate::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub topic: String,
}

/// Body for POST /messages. A client-sent `id` or `createdAt` has no field
/// here and is dropped on deserialization.
#[derive(Deserialize)]
pub struct CreateMessage {
    pub topic: String,
    pub sender: String,
    pub content: String,
}

/// GET /messages?topic=...
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Message>>, StatusCode> {
    match state.store.find_by_topic(&query.topic).await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to list messages: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /messages
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateMessage>,
) -> Result<Json<Message>, StatusCode> {
    let message = Message {
        id: String::new(),
        topic: body.topic,
        sender: body.sender,
        content: body.content,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    match state.store.save(message).await {
        Ok(saved) => Ok(Json(saved)),
        Err(e) => {
            tracing::error!("Failed to save message: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
