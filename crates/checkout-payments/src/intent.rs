//! Payment Intent Issuing
//!
//! Creates one Stripe PaymentIntent per checkout attempt and returns its
//! client secret. The browser confirms the intent with Stripe.js; the server
//! never sees card data.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stripe::{Client, CreatePaymentIntent, Currency, PaymentIntent};

use crate::error::{PaymentError, Result};

/// A freshly created payment intent
#[derive(Clone, Serialize, Deserialize)]
pub struct IssuedIntent {
    /// Stripe intent ID (`pi_...`)
    pub id: String,

    /// Secret handed to the browser; single use
    pub client_secret: String,
}

impl std::fmt::Debug for IssuedIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedIntent")
            .field("id", &self.id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Issues payment intents (Strategy pattern)
///
/// Implement this for each payment provider.
#[async_trait]
pub trait IntentIssuer: Send + Sync {
    /// Create a new intent for `amount_minor` minor currency units
    async fn issue(&self, amount_minor: i64) -> Result<IssuedIntent>;

    /// Provider name
    fn name(&self) -> &str;
}

/// Stripe issuer configuration
#[derive(Clone, Debug)]
pub struct StripeConfig {
    pub secret_key: String,
    pub currency: Currency,
}

impl StripeConfig {
    /// Read `STRIPE_SECRET_KEY` and optional `PAYMENT_CURRENCY` (default `usd`)
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;
        let currency = match std::env::var("PAYMENT_CURRENCY") {
            Ok(code) => code
                .to_lowercase()
                .parse::<Currency>()
                .map_err(|_| PaymentError::Config(format!("unknown currency: {code}")))?,
            Err(_) => Currency::USD,
        };

        Ok(Self {
            secret_key,
            currency,
        })
    }
}

/// Stripe client wrapper
pub struct StripeIntentIssuer {
    client: Client,
    currency: Currency,
}

impl StripeIntentIssuer {
    /// Create a new Stripe issuer
    pub fn new(config: &StripeConfig) -> Self {
        Self {
            client: Client::new(config.secret_key.clone()),
            currency: config.currency,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(&StripeConfig::from_env()?))
    }

    pub const fn currency(&self) -> Currency {
        self.currency
    }
}

#[async_trait]
impl IntentIssuer for StripeIntentIssuer {
    async fn issue(&self, amount_minor: i64) -> Result<IssuedIntent> {
        if amount_minor <= 0 {
            return Err(PaymentError::InvalidAmount(amount_minor));
        }

        let mut params = CreatePaymentIntent::new(amount_minor, self.currency);
        params.payment_method_types = Some(vec!["card".to_string()]);

        let intent = PaymentIntent::create(&self.client, params).await?;
        let id = intent.id.to_string();
        let client_secret = intent
            .client_secret
            .ok_or_else(|| PaymentError::MissingClientSecret(id.clone()))?;

        tracing::info!(payment_intent = %id, amount = amount_minor, "Created payment intent");

        Ok(IssuedIntent { id, client_secret })
    }

    fn name(&self) -> &str {
        "Stripe"
    }
}
