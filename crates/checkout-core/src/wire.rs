//! Wire Types
//!
//! JSON bodies exchanged with the intent endpoint and the shape of the
//! payment provider's confirmation answer.

use serde::{Deserialize, Serialize};

/// Opaque single-use payment intent secret.
///
/// `Debug` is redacted so the secret never ends up in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ClientSecret(***)")
    }
}

/// `POST` body for intent creation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIntentRequest {
    /// Amount in minor currency units
    pub amount: i64,
}

/// Successful intent creation response
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: ClientSecret,
}

/// Structured error reported by the payment provider
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderError {
    /// Human-readable message, shown to the user verbatim
    #[serde(default)]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

/// Payment intent as reported back after confirmation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedIntent {
    #[serde(default)]
    pub id: Option<String>,
    pub status: String,
}

impl ConfirmedIntent {
    pub fn succeeded(&self) -> bool {
        self.status == "succeeded"
    }
}

/// Answer of a confirmation call: `{ error }` or `{ paymentIntent }`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ProviderError>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_intent: Option<ConfirmedIntent>,
}

impl ConfirmResult {
    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            error: Some(ProviderError {
                message: message.into(),
                code: None,
                error_type: None,
            }),
            payment_intent: None,
        }
    }

    pub fn with_status(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            error: None,
            payment_intent: Some(ConfirmedIntent {
                id: Some(id.into()),
                status: status.into(),
            }),
        }
    }
}
