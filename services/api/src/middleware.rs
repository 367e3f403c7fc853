//! HTTP layers applied to every API route

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Open CORS policy; the web frontend is served from a different origin
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Wrap `router` with request tracing and CORS
pub fn apply(router: Router) -> Router {
    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
