//! Error Types

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Checkout error types
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Package rejected at construction
    #[error("Invalid package: {0}")]
    InvalidPackage(String),

    /// Price does not fit in minor currency units
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(Decimal),

    /// Network-level failure talking to the intent backend
    #[error("Transport error: {0}")]
    Transport(String),

    /// Intent backend answered with a non-success status
    #[error("Backend returned HTTP {status}: {body}")]
    BackendStatus { status: u16, body: String },

    /// Response body could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Payment confirmation call itself failed (script error, rejected promise)
    #[error("Confirmation failed: {0}")]
    Confirmation(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CheckoutError {
    /// Whether this error belongs to the transport class: the provider's own
    /// verdict was never obtained.
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_)
                | Self::BackendStatus { .. }
                | Self::MalformedResponse(_)
                | Self::Confirmation(_)
                | Self::Json(_)
        )
    }

    /// Get user-friendly message
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidPackage(_) | Self::AmountOutOfRange(_) => {
                "This package can't be purchased right now."
            }
            _ => "Payment failed. Please try again.",
        }
    }
}

impl From<reqwest::Error> for CheckoutError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
