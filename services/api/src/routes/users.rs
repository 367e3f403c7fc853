//! User routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    error::{ApiError, ApiResult},
    models::{User, UserPayload},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(save_user))
        .route("/:user_id", get(get_user).delete(delete_user))
        .route("/email/:email", get(get_user_by_email))
        .route("/userPhone/:phone", get(get_user_by_phone))
        .route("/username/:username", get(get_user_by_username))
}

fn found(user: Option<User>, key: &str) -> ApiResult<Json<User>> {
    user.map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("User {} not found", key)))
}

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.users.get_all().await?;
    Ok(Json(users))
}

/// Get a user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<User>> {
    found(state.users.get_by_id(&user_id).await?, &user_id)
}

/// Get a user by email
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<User>> {
    found(state.users.get_by_email(&email).await?, &email)
}

/// Get a user by phone number
pub async fn get_user_by_phone(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> ApiResult<Json<User>> {
    found(state.users.get_by_phone(&phone).await?, &phone)
}

/// Get a user by username
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<User>> {
    found(state.users.get_by_username(&username).await?, &username)
}

/// Create a user or overwrite an existing one
pub async fn save_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> ApiResult<impl IntoResponse> {
    let user = state.users.save(payload).await?;
    Ok(Json(user))
}

/// Delete a user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let existed = state.users.delete(&user_id).await?;
    if !existed {
        tracing::debug!("Delete requested for unknown user {}", user_id);
    }

    Ok((StatusCode::OK, "User deleted successfully."))
}
