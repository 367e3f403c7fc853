//! Store routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    error::{ApiError, ApiResult},
    models::NewStore,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_stores).post(create_store))
        .route("/:id", get(get_store).delete(delete_store))
}

pub async fn create_store(
    State(state): State<AppState>,
    Json(payload): Json<NewStore>,
) -> ApiResult<impl IntoResponse> {
    let store = state.stores.add(payload).await?;
    Ok((StatusCode::CREATED, Json(store)))
}

pub async fn get_stores(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.stores.get_all().await?))
}

pub async fn get_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let store = state
        .stores
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Store {} not found", id)))?;

    Ok(Json(store))
}

pub async fn delete_store(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    state.stores.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
