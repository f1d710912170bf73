//! # checkout-payments
//!
//! Server-side half of the coin checkout: issuing payment intents.
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐  amount  ┌──────────────┐  PaymentIntent  ┌──────────┐
//! │   Browser   │─────────▶│  Our Server  │────────────────▶│  Stripe  │
//! │ (Elements)  │◀─secret──│              │◀──client_secret─│          │
//! └─────────────┘          └──────────────┘                 └──────────┘
//!        │                                                        ▲
//!        └──────────── confirmCardPayment(secret, card) ──────────┘
//! ```
//!
//! Card details go straight from the Stripe Elements iframe to Stripe; this
//! crate only ever handles amounts and intent secrets.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_payments::{IntentIssuer, StripeIntentIssuer};
//!
//! let issuer = StripeIntentIssuer::from_env()?;
//! let intent = issuer.issue(499).await?;
//! // Return intent.client_secret to the browser
//! ```

mod error;
mod intent;
mod mock;

pub use error::{PaymentError, Result};
pub use intent::{IntentIssuer, IssuedIntent, StripeConfig, StripeIntentIssuer};
pub use mock::MockIntentIssuer;
