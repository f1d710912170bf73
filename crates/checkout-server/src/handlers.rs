//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use checkout_core::{ClientSecret, CreateIntentRequest, CreateIntentResponse};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub payments_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        payments_configured: state.issuer.is_some(),
    })
}

/// Create a payment intent and return its client secret
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreateIntentRequest>,
) -> Result<Json<CreateIntentResponse>, ApiError> {
    let issuer = state.issuer.as_ref().ok_or_else(|| {
        api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Payments not configured",
            "PAYMENTS_DISABLED",
        )
    })?;

    if payload.amount <= 0 {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Amount must be a positive number of cents",
            "INVALID_AMOUNT",
        ));
    }

    let intent = issuer.issue(payload.amount).await.map_err(|e| {
        tracing::error!(provider = issuer.name(), amount = payload.amount, "Intent error: {}", e);
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            e.user_message(),
            "INTENT_ERROR",
        )
    })?;

    tracing::debug!(payment_intent = %intent.id, "Issued client secret");

    Ok(Json(CreateIntentResponse {
        client_secret: ClientSecret::new(intent.client_secret),
    }))
}
