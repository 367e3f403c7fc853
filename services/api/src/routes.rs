//! API service routes

mod bookings;
mod messages;
mod payments;
mod properties;
mod reviews;
mod stores;
mod users;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde_json::json;

use crate::{error::ApiResult, middleware, state::AppState};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/users", users::router())
        .nest("/property", properties::router())
        .nest("/stores", stores::router())
        .nest("/bookings", bookings::router())
        .nest("/payments", payments::router())
        .nest("/reviews", reviews::router())
        .nest("/messages", messages::router());

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .with_state(state);

    middleware::apply(app)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let status = match &state.db_pool {
        Some(pool) if !common::database::health_check(pool).await? => "degraded",
        _ => "ok",
    };

    Ok(Json(json!({
        "status": status,
        "service": "rentals-api"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::in_memory())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, value)
    }

    #[tokio::test]
    async fn test_health_without_database() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "rentals-api");
    }

    #[tokio::test]
    async fn test_user_lifecycle() {
        let app = app();

        let (status, user) = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({
                "username": "ama",
                "email": "ama@example.com",
                "phone": "0240000000",
                "password": "secret",
                "role": "LANDLORD"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(user.get("password").is_none());
        assert!(user.get("passwordHash").is_none());

        let user_id = user["userId"].as_str().unwrap().to_string();
        assert!(!user_id.is_empty());

        let uri = "/api/users/email/ama@example.com";
        let (status, found) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["userId"], user_id.as_str());

        let uri = "/api/users/userPhone/0240000000";
        let (status, found) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["username"], "ama");

        let (status, found) = send(&app, Method::GET, "/api/users/username/ama", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["role"], "LANDLORD");

        let uri = format!("/api/users/{}", user_id);
        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("User deleted successfully.".to_string()));

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_property_routes() {
        let app = app();

        let (status, property) = send(
            &app,
            Method::POST,
            "/api/property",
            Some(json!({
                "name": "Garden flat",
                "price": 450.0,
                "propertyType": "APARTMENT",
                "storeId": 3,
                "location": { "city": "Accra", "lat": 5.6, "lng": -0.19 }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(property["location"]["city"], "Accra");

        let id = property["propertyId"].as_i64().unwrap();

        let (status, listed) = send(&app, Method::GET, "/api/property/store/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, Method::GET, "/api/property/store/4", None).await;
        assert_eq!(status, StatusCode::OK);

        let uri = format!("/api/property/{}", id);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_store_routes() {
        let app = app();

        let (status, store) = send(
            &app,
            Method::POST,
            "/api/stores",
            Some(json!({ "name": "Osu Lettings", "latitude": 5.55 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let uri = format!("/api/stores/{}", store["storeId"]);
        let (status, fetched) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], "Osu Lettings");

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_booking_cancel() {
        let app = app();

        let (status, booking) = send(
            &app,
            Method::POST,
            "/api/bookings",
            Some(json!({
                "userId": "u1",
                "totalAmount": 120.5,
                "checkInDate": "2025-03-01",
                "conformedByOwner": true
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(booking["confirmedByOwner"], true);

        let id = booking["bookingId"].as_i64().unwrap();
        let uri = format!("/api/bookings/cancel/{}", id);
        let (status, body) = send(&app, Method::PUT, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);

        let (_, fetched) = send(&app, Method::GET, &format!("/api/bookings/{}", id), None).await;
        assert_eq!(fetched["status"], "CANCELLED");
    }

    #[tokio::test]
    async fn test_missing_booking_is_not_found() {
        let app = app();

        let (status, _) = send(&app, Method::GET, "/api/bookings/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::PUT, "/api/bookings/cancel/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_payments_are_listed() {
        let app = app();

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/payments",
            Some(json!({ "bookingId": 1, "amount": 120.5 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, payments) = send(&app, Method::GET, "/api/payments", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payments.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_review_by_property() {
        let app = app();

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/reviews",
            Some(json!({ "rating": 4, "comment": "Clean", "propertyId": 7, "userId": "u1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, reviews) = send(&app, Method::GET, "/api/reviews/property/7", None).await;
        assert_eq!(status, StatusCode::OK);

        let reviews = reviews.as_array().unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0]["reviewId"], created["reviewId"]);
        assert_eq!(reviews[0]["comment"], "Clean");
        assert!(reviews[0]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_review_update_and_delete() {
        let app = app();

        let (_, created) = send(
            &app,
            Method::POST,
            "/api/reviews",
            Some(json!({ "rating": 2, "propertyId": 1 })),
        )
        .await;
        let uri = format!("/api/reviews/{}", created["reviewId"]);

        let (status, updated) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({ "rating": 5, "comment": "Better now", "propertyId": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["rating"], 5);
        assert_eq!(updated["createdAt"], created["createdAt"]);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "rating": 1 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_conversation() {
        let app = app();

        for (from, to, content) in [("a", "b", "hi"), ("b", "a", "hello"), ("a", "c", "other")] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/api/messages",
                Some(json!({ "senderId": from, "receiverId": to, "content": content })),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, messages) = send(
            &app,
            Method::GET,
            "/api/messages/conversation?senderId=b&receiverId=a",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let contents: Vec<&str> = messages
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["content"].as_str().unwrap())
            .collect();
        assert_eq!(contents, vec!["hi", "hello"]);
    }

    #[tokio::test]
    async fn test_conversation_requires_both_participants() {
        let (status, body) = send(
            &app(),
            Method::GET,
            "/api/messages/conversation?senderId=a",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_create_ignores_supplied_ids() {
        let app = app();

        let cases = [
            ("/api/property", "propertyId", json!({ "propertyId": 99, "name": "Loft" })),
            ("/api/stores", "storeId", json!({ "storeId": 99, "name": "Agency" })),
            ("/api/bookings", "bookingId", json!({ "bookingId": 99, "userId": "u1" })),
            ("/api/payments", "paymentId", json!({ "paymentId": 99, "amount": 10.0 })),
            ("/api/reviews", "reviewId", json!({ "reviewId": 99, "rating": 3 })),
            (
                "/api/messages",
                "id",
                json!({ "id": 99, "senderId": "a", "receiverId": "b", "content": "hey" }),
            ),
        ];

        for (uri, id_field, body) in cases {
            let (status, created) = send(&app, Method::POST, uri, Some(body)).await;
            assert!(status.is_success(), "{} returned {}", uri, status);
            assert_eq!(created[id_field], 1, "{} kept the supplied id", uri);
        }
    }

    #[tokio::test]
    async fn test_booking_is_one_to_one_with_user() {
        let app = app();

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/users",
            Some(json!({ "userId": "u1", "username": "yaw", "email": "yaw@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let booking = json!({ "userId": "u1", "totalAmount": 80.0 });
        let (status, _) = send(&app, Method::POST, "/api/bookings", Some(booking.clone())).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::POST, "/api/bookings", Some(booking)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].is_string());

        let (status, _) = send(&app, Method::DELETE, "/api/users/u1", None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) = send(&app, Method::GET, "/api/users/u1", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, bookings) = send(&app, Method::GET, "/api/bookings", None).await;
        assert_eq!(bookings.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_with_prefixed_contact_fields() {
        let (status, user) = send(
            &app(),
            Method::POST,
            "/api/users",
            Some(json!({
                "username": "efua",
                "userEmail": "efua@example.com",
                "userPhone": "0551234567",
                "userAddress": "Cape Coast"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["email"], "efua@example.com");
        assert_eq!(user["phone"], "0551234567");
        assert_eq!(user["address"], "Cape Coast");
    }
}
