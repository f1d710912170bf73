//! # checkout-core
//!
//! Client-side checkout flow for coin packages: the state machine, the
//! pricing rule, and the contracts of its two external collaborators.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  amount   ┌──────────────────┐
//! │              │──────────▶│  IntentBackend   │  POST /api/create-payment-intent
//! │   Checkout   │◀──secret──│  (HTTP / mock)   │
//! │  Controller  │           └──────────────────┘
//! │              │  secret   ┌──────────────────┐
//! │ Idle/Ready/  │──────────▶│ PaymentConfirmer │  Stripe.js / mock
//! │ Submitting/  │◀─verdict──│                  │
//! │ Succeeded/   │           └──────────────────┘
//! │ Failed       │──────────▶ Notifier, CheckoutObserver
//! └──────────────┘
//! ```
//!
//! Every collaborator is injected explicitly, so the controller can be
//! exercised in isolation with the types in [`mock`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use checkout_core::{CheckoutController, HttpIntentBackend, HttpIntentBackendConfig};
//!
//! let backend = HttpIntentBackend::new(&HttpIntentBackendConfig::new(origin));
//! let controller = CheckoutController::new(Rc::new(backend), Rc::new(toast_notifier))
//!     .with_observer(Rc::new(signal_observer));
//!
//! controller.open();
//! controller.attach_confirmer(stripe_confirmer);
//! controller.on_payment_method_changed(true);
//! let outcome = controller.submit_payment(&package, &method).await;
//! ```

pub mod backend;
pub mod config;
pub mod confirm;
pub mod error;
pub mod machine;
pub mod mock;
pub mod notify;
pub mod package;
pub mod session;
pub mod wire;

pub use backend::{HttpIntentBackend, HttpIntentBackendConfig, INTENT_PATH, IntentBackend};
pub use config::CheckoutConfig;
pub use confirm::{BillingDetails, PaymentConfirmer, PaymentMethodData};
pub use error::{CheckoutError, Result};
pub use machine::{CheckoutController, SkipReason, SubmitOutcome};
pub use notify::{
    CheckoutObserver, NoopObserver, Notification, NotificationLevel, Notifier,
};
pub use package::Package;
pub use rust_decimal::Decimal;
pub use session::{CheckoutPhase, CheckoutSnapshot, SessionId};
pub use wire::{
    ClientSecret, ConfirmResult, ConfirmedIntent, CreateIntentRequest, CreateIntentResponse,
    ProviderError,
};
