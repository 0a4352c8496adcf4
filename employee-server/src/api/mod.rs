//! HTTP API
//!
//! Routes, cross-origin policy and the middleware stack

pub mod employees;
pub mod middleware;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue, Method, header};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use middleware::{REQUEST_ID_HEADER, XRequestId};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new().merge(employees::router())
}

/// Cross-origin policy: one origin, GET/POST/OPTIONS, `content-type`, credentials
///
/// Requests from any other origin get no `access-control-allow-origin` header.
pub fn cors_layer(allowed_origin: &str) -> AppResult<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin)
        .map_err(|e| AppError::internal(format!("invalid ALLOWED_ORIGIN {allowed_origin:?}: {e}")))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |request_origin, _| {
            *request_origin == origin
        }))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}

/// Build the fully configured application
pub fn build_app(state: ServerState) -> AppResult<Router> {
    let cors = cors_layer(&state.config.allowed_origin)?;
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Ok(build_router()
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        .layer(cors)
        .layer(CompressionLayer::new())
        // Access log
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        // ========== Request ID ==========
        // Propagate sits inside Set so it sees the generated id
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, XRequestId)))
}
