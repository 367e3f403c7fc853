//! Payment routes

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::{error::ApiResult, models::NewPayment, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_payments).post(create_payment))
}

pub async fn get_payments(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.payments.get_all().await?))
}

pub async fn create_payment(
    State(state): State<AppState>,
    Json(payload): Json<NewPayment>,
) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.payments.save(payload).await?))
}
