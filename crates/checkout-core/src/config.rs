//! Checkout Configuration

use serde::{Deserialize, Serialize};

/// User-facing copy for checkout outcomes
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Shown once when a payment succeeds
    #[serde(default = "default_success_message")]
    pub success_message: String,

    /// Shown for every transport failure; never carries provider details
    #[serde(default = "default_generic_failure_message")]
    pub generic_failure_message: String,

    /// Used when the provider reports an error without any text
    #[serde(default = "default_decline_message")]
    pub decline_fallback_message: String,
}

fn default_success_message() -> String {
    "Payment successful! 🎉".into()
}

fn default_generic_failure_message() -> String {
    "Payment failed. Please try again.".into()
}

fn default_decline_message() -> String {
    "Your payment was declined.".into()
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            success_message: default_success_message(),
            generic_failure_message: default_generic_failure_message(),
            decline_fallback_message: default_decline_message(),
        }
    }
}

impl CheckoutConfig {
    /// Message for a confirmation that ended in a non-success status
    pub fn incomplete_message(&self, status: &str) -> String {
        format!("Payment was not completed (status: {status}).")
    }
}
