//! Mock Intent Issuer
//!
//! For testing and local development without Stripe credentials.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use super::intent::{IntentIssuer, IssuedIntent};
use crate::error::{PaymentError, Result};

/// Issues fake `pi_mock_*` intents, or fails every call
#[derive(Default)]
pub struct MockIntentIssuer {
    issued: AtomicU64,
    fail_with: Option<String>,
}

impl MockIntentIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issuer whose every call fails as if Stripe returned an error
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            issued: AtomicU64::new(0),
            fail_with: Some(reason.into()),
        }
    }

    /// Number of intents issued so far
    pub fn issued_count(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IntentIssuer for MockIntentIssuer {
    async fn issue(&self, amount_minor: i64) -> Result<IssuedIntent> {
        if amount_minor <= 0 {
            return Err(PaymentError::InvalidAmount(amount_minor));
        }
        if let Some(reason) = &self.fail_with {
            return Err(PaymentError::Stripe(reason.clone()));
        }

        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(IssuedIntent {
            id: format!("pi_mock_{n}"),
            client_secret: format!("pi_mock_{n}_secret_{amount_minor}"),
        })
    }

    fn name(&self) -> &str {
        "MockIssuer"
    }
}
