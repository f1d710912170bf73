//! Application State

use std::sync::Arc;

use checkout_payments::IntentIssuer;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    /// Intent issuer (optional - None if payments are not configured)
    pub issuer: Option<Arc<dyn IntentIssuer>>,
}

impl AppState {
    pub fn new(issuer: Option<Arc<dyn IntentIssuer>>) -> Self {
        Self { issuer }
    }

    pub fn with_issuer(issuer: Arc<dyn IntentIssuer>) -> Self {
        Self {
            issuer: Some(issuer),
        }
    }
}
