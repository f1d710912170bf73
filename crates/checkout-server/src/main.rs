//! coin-checkout server binary

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use checkout_core::INTENT_PATH;
use checkout_payments::{IntentIssuer, StripeIntentIssuer};
use checkout_server::{AppState, ServerConfig, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Initialize payments
    let issuer: Option<Arc<dyn IntentIssuer>> = match StripeIntentIssuer::from_env() {
        Ok(stripe) => {
            tracing::info!(currency = ?stripe.currency(), "✓ Stripe configured");
            Some(Arc::new(stripe))
        }
        Err(e) => {
            tracing::warn!("⚠ Stripe not configured - payments disabled ({})", e);
            tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
            None
        }
    };

    let app = router(AppState::new(issuer), &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 coin-checkout server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  POST {} - Create payment intent", INTENT_PATH);
    tracing::info!("  GET  /*      - Frontend from {}", config.static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}
