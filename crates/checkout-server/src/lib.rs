//! coin-checkout HTTP Server
//!
//! Axum application issuing payment intents for the checkout modal and
//! serving the WASM frontend.

pub mod config;
pub mod handlers;
pub mod state;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use checkout_core::INTENT_PATH;

pub use config::ServerConfig;
pub use state::AppState;

use crate::handlers::{create_payment_intent, health_check};

/// Build the application router
pub fn router(state: AppState, static_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Payments
        .route(INTENT_PATH, post(create_payment_intent))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
