//! Intent Backend
//!
//! The backend is an opaque collaborator: given an amount in minor units it
//! hands back a fresh client secret. `HttpIntentBackend` speaks the JSON
//! contract of the `create-payment-intent` endpoint and runs both natively
//! and in the browser.

use async_trait::async_trait;

use crate::error::{CheckoutError, Result};
use crate::wire::{ClientSecret, CreateIntentRequest, CreateIntentResponse};

/// Path of the intent endpoint on the application server
pub const INTENT_PATH: &str = "/api/create-payment-intent";

/// Source of payment intent secrets (Strategy pattern)
#[async_trait(?Send)]
pub trait IntentBackend {
    /// Request a brand-new intent secret sized to `amount_minor`
    async fn create_intent(&self, amount_minor: i64) -> Result<ClientSecret>;
}

/// HTTP intent backend configuration
#[derive(Clone, Debug)]
pub struct HttpIntentBackendConfig {
    /// Scheme, host and port of the application server
    pub base_url: String,
}

impl Default for HttpIntentBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
        }
    }
}

impl HttpIntentBackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), INTENT_PATH)
    }
}

/// Intent backend reached over HTTP
pub struct HttpIntentBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpIntentBackend {
    pub fn new(config: &HttpIntentBackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl IntentBackend for HttpIntentBackend {
    async fn create_intent(&self, amount_minor: i64) -> Result<ClientSecret> {
        tracing::debug!(amount = amount_minor, endpoint = %self.endpoint, "Requesting payment intent");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&CreateIntentRequest { amount: amount_minor })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CheckoutError::BackendStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: CreateIntentResponse = serde_json::from_str(&body)
            .map_err(|e| CheckoutError::MalformedResponse(e.to_string()))?;

        if parsed.client_secret.expose().is_empty() {
            return Err(CheckoutError::MalformedResponse("empty clientSecret".into()));
        }

        Ok(parsed.client_secret)
    }
}
