//! Property routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    error::{ApiError, ApiResult},
    models::NewProperty,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_properties).post(create_property))
        .route("/:id", get(get_property).delete(delete_property))
        .route("/store/:store_id", get(get_properties_by_store))
}

/// Create a property
pub async fn create_property(
    State(state): State<AppState>,
    Json(payload): Json<NewProperty>,
) -> ApiResult<impl IntoResponse> {
    let property = state.properties.add(payload).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// Get all properties
pub async fn get_properties(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.properties.get_all().await?))
}

/// Get a property by ID
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let property = state
        .properties
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Property {} not found", id)))?;

    Ok(Json(property))
}

/// Get the properties listed under a store
pub async fn get_properties_by_store(
    State(state): State<AppState>,
    Path(store_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.properties.get_by_store(store_id).await?))
}

/// Delete a property by ID
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    state.properties.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
