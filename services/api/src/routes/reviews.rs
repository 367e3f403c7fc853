//! Review routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    error::{ApiError, ApiResult},
    models::ReviewPayload,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_reviews).post(create_review))
        .route(
            "/:id",
            get(get_review).put(update_review).delete(delete_review),
        )
        .route("/property/:property_id", get(get_reviews_by_property))
}

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Review {} not found", id))
}

/// Create a review
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<ReviewPayload>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reviews.save(payload).await?))
}

/// Get all reviews
pub async fn get_reviews(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reviews.get_all().await?))
}

/// Get a review by ID
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let review = state.reviews.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(review))
}

/// Get all reviews of a property
pub async fn get_reviews_by_property(
    State(state): State<AppState>,
    Path(property_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.reviews.get_by_property(property_id).await?))
}

/// Update a review
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReviewPayload>,
) -> ApiResult<impl IntoResponse> {
    let review = state
        .reviews
        .update(id, payload)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(review))
}

/// Delete a review
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    if state.reviews.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
