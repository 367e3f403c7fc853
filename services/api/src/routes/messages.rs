//! Message routes

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    error::{ApiError, ApiResult},
    models::{ConversationQuery, NewMessage},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(send_message))
        .route("/conversation", get(get_conversation))
}

/// Messages exchanged between `senderId` and `receiverId`, oldest first
pub async fn get_conversation(
    State(state): State<AppState>,
    query: Result<Query<ConversationQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let messages = state
        .messages
        .get_conversation(&query.sender_id, &query.receiver_id)
        .await?;

    Ok(Json(messages))
}

/// Send a message
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<NewMessage>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.messages.send(payload).await?))
}
