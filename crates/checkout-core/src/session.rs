//! Checkout Session
//!
//! Transient state scoped to one modal lifecycle.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique checkout session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checkout phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPhase {
    /// Modal closed or payment method incomplete
    Idle,
    /// Payment method complete, awaiting the user
    Ready,
    /// Intent requested, confirmation in flight
    Submitting,
    Succeeded,
    /// Last attempt failed; retry-eligible
    Failed,
}

impl Default for CheckoutPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Read-only view of a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSnapshot {
    pub phase: CheckoutPhase,
    pub is_open: bool,
    pub is_loading: bool,
    pub is_payment_method_complete: bool,
    pub last_error: Option<String>,
    /// Whether a payment confirmer is attached
    pub confirmer_ready: bool,
}

impl CheckoutSnapshot {
    /// `isOpen && isPaymentMethodComplete && !isLoading`
    pub const fn can_submit(&self) -> bool {
        self.is_open && self.is_payment_method_complete && !self.is_loading
    }

    /// Whether the pay control should be enabled
    pub const fn pay_enabled(&self) -> bool {
        self.can_submit() && self.confirmer_ready
    }
}

impl Default for CheckoutSnapshot {
    fn default() -> Self {
        Self {
            phase: CheckoutPhase::Idle,
            is_open: false,
            is_loading: false,
            is_payment_method_complete: false,
            last_error: None,
            confirmer_ready: false,
        }
    }
}

/// Mutable session state owned by the controller
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    /// `None` while the modal is closed
    pub id: Option<SessionId>,
    pub phase: CheckoutPhase,
    pub is_loading: bool,
    pub is_payment_method_complete: bool,
    pub last_error: Option<String>,
}

impl SessionState {
    /// Fresh open session
    pub fn opened() -> Self {
        Self {
            id: Some(SessionId::new()),
            ..Self::default()
        }
    }

    pub const fn is_open(&self) -> bool {
        self.id.is_some()
    }

    /// Whether `id` still names the live session
    pub fn is_current(&self, id: &SessionId) -> bool {
        self.id.as_ref() == Some(id)
    }

    /// Phase implied by the completeness flag outside of an attempt
    pub const fn resting_phase(&self) -> CheckoutPhase {
        if self.is_payment_method_complete {
            CheckoutPhase::Ready
        } else {
            CheckoutPhase::Idle
        }
    }

    pub fn snapshot(&self, confirmer_ready: bool) -> CheckoutSnapshot {
        CheckoutSnapshot {
            phase: self.phase,
            is_open: self.is_open(),
            is_loading: self.is_loading,
            is_payment_method_complete: self.is_payment_method_complete,
            last_error: self.last_error.clone(),
            confirmer_ready,
        }
    }
}
