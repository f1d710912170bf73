//! Frontend Configuration

use checkout_core::{CheckoutConfig, HttpIntentBackendConfig};

/// Runtime settings for the browser client
#[derive(Clone, Debug, Default)]
pub struct WebConfig {
    /// Stripe publishable key, baked in at build time
    pub publishable_key: Option<String>,

    /// Base URL of the intent backend
    pub api_base: Option<String>,

    /// Outcome messages shown by the checkout
    pub checkout: CheckoutConfig,
}

impl WebConfig {
    /// Read the build-time key and resolve the API against the page origin
    pub fn load() -> Self {
        Self {
            publishable_key: option_env!("STRIPE_PUBLISHABLE_KEY")
                .filter(|key| !key.is_empty())
                .map(String::from),
            api_base: web_sys::window().and_then(|window| window.location().origin().ok()),
            checkout: CheckoutConfig::default(),
        }
    }

    /// Backend settings; falls back to the default base URL off-page
    pub fn backend(&self) -> HttpIntentBackendConfig {
        self.api_base
            .clone()
            .map_or_else(HttpIntentBackendConfig::default, HttpIntentBackendConfig::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_uses_page_origin() {
        let config = WebConfig {
            publishable_key: None,
            api_base: Some("https://coins.example".into()),
            ..WebConfig::default()
        };
        assert_eq!(
            config.backend().endpoint(),
            "https://coins.example/api/create-payment-intent"
        );
    }

    #[test]
    fn test_backend_defaults_without_origin() {
        let config = WebConfig::default();
        assert_eq!(
            config.backend().base_url,
            HttpIntentBackendConfig::default().base_url
        );
    }
}
