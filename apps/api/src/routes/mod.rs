pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cutting::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/cut", post(handlers::handle_cut))
}
