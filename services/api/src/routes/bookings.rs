//! Booking routes

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use crate::{error::ApiResult, models::NewBooking, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_bookings).post(create_booking))
        .route("/:id", get(get_booking))
        .route("/cancel/:id", put(cancel_booking))
}

/// Get all bookings
pub async fn get_bookings(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.bookings.get_all().await?))
}

/// Get a booking by ID
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.bookings.get_by_id(id).await?))
}

/// Create a booking
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<NewBooking>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.bookings.save(payload).await?))
}

/// Cancel a booking
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    state.bookings.cancel(id).await?;
    Ok(StatusCode::OK)
}
