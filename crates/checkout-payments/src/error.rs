//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Stripe created the intent but returned no client secret
    #[error("Payment intent {0} has no client secret")]
    MissingClientSecret(String),

    /// Amount is not a positive number of minor units
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Stripe(_))
    }

    /// Get user-friendly message
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Stripe(_) | Self::MissingClientSecret(_) => {
                "Payment processing failed. Please try again."
            }
            Self::InvalidAmount(_) => "The payment amount is invalid.",
            Self::Config(_) => "Service configuration error.",
        }
    }
}

impl From<stripe::StripeError> for PaymentError {
    fn from(err: stripe::StripeError) -> Self {
        Self::Stripe(err.to_string())
    }
}
