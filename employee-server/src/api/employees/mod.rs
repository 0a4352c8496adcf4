//! Employee API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employee", post(handler::create).options(handler::preflight))
        .route("/employees", get(handler::list).options(handler::preflight))
}
