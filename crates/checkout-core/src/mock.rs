//! Mock Collaborators
//!
//! Scripted backend and confirmer plus recording sinks, for tests and demos.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::backend::IntentBackend;
use crate::confirm::{PaymentConfirmer, PaymentMethodData};
use crate::error::{CheckoutError, Result};
use crate::notify::{CheckoutObserver, Notification, Notifier};
use crate::session::{CheckoutPhase, CheckoutSnapshot};
use crate::wire::{ClientSecret, ConfirmResult};

type Hook = Box<dyn Fn()>;

/// Intent backend that hands out numbered secrets or fails with a status
#[derive(Default)]
pub struct MockIntentBackend {
    fail_status: Option<u16>,
    requests: RefCell<Vec<i64>>,
    hook: RefCell<Option<Hook>>,
}

impl MockIntentBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that always answers with HTTP `status`
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    /// Run `hook` while a request is "in flight"
    pub fn on_request(&self, hook: impl Fn() + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(hook));
    }

    /// Amounts requested so far, in order
    pub fn requested_amounts(&self) -> Vec<i64> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl IntentBackend for MockIntentBackend {
    async fn create_intent(&self, amount_minor: i64) -> Result<ClientSecret> {
        let n = {
            let mut requests = self.requests.borrow_mut();
            requests.push(amount_minor);
            requests.len()
        };

        if let Some(hook) = self.hook.borrow().as_ref() {
            hook();
        }

        match self.fail_status {
            Some(status) => Err(CheckoutError::BackendStatus {
                status,
                body: r#"{"error":"internal"}"#.into(),
            }),
            None => Ok(ClientSecret::new(format!("pi_mock_{n}_secret_test"))),
        }
    }
}

enum Behavior {
    Status(String),
    Decline(String),
    Broken(String),
}

/// Payment confirmer with a fixed answer
pub struct MockConfirmer {
    behavior: Behavior,
    secrets: RefCell<Vec<String>>,
    hook: RefCell<Option<Hook>>,
}

impl MockConfirmer {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            secrets: RefCell::new(Vec::new()),
            hook: RefCell::new(None),
        }
    }

    pub fn succeeding() -> Self {
        Self::with_status("succeeded")
    }

    /// Provider answers with a payment intent in `status`
    pub fn with_status(status: &str) -> Self {
        Self::with_behavior(Behavior::Status(status.into()))
    }

    /// Provider answers with a structured error
    pub fn declining(message: &str) -> Self {
        Self::with_behavior(Behavior::Decline(message.into()))
    }

    /// The confirmation call itself fails
    pub fn broken(reason: &str) -> Self {
        Self::with_behavior(Behavior::Broken(reason.into()))
    }

    pub fn on_confirm(&self, hook: impl Fn() + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(hook));
    }

    /// Secrets this confirmer was asked to confirm, in order
    pub fn confirmed_secrets(&self) -> Vec<String> {
        self.secrets.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PaymentConfirmer for MockConfirmer {
    async fn confirm(
        &self,
        secret: &ClientSecret,
        _method: &PaymentMethodData,
    ) -> Result<ConfirmResult> {
        self.secrets.borrow_mut().push(secret.expose().to_string());

        if let Some(hook) = self.hook.borrow().as_ref() {
            hook();
        }

        match &self.behavior {
            Behavior::Status(status) => {
                let id = secret
                    .expose()
                    .split("_secret")
                    .next()
                    .unwrap_or_default()
                    .to_string();
                Ok(ConfirmResult::with_status(id, status.clone()))
            }
            Behavior::Decline(message) => Ok(ConfirmResult::declined(message.clone())),
            Behavior::Broken(reason) => Err(CheckoutError::Confirmation(reason.clone())),
        }
    }

    fn name(&self) -> &str {
        "MockProvider"
    }
}

/// Notifier that keeps everything it receives
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

/// Observer that keeps every snapshot it receives
#[derive(Default)]
pub struct RecordingObserver {
    snapshots: RefCell<Vec<CheckoutSnapshot>>,
}

impl RecordingObserver {
    pub fn snapshots(&self) -> Vec<CheckoutSnapshot> {
        self.snapshots.borrow().clone()
    }

    /// Distinct consecutive phases seen so far
    pub fn phases(&self) -> Vec<CheckoutPhase> {
        let mut phases: Vec<CheckoutPhase> = self
            .snapshots
            .borrow()
            .iter()
            .map(|snapshot| snapshot.phase)
            .collect();
        phases.dedup();
        phases
    }
}

impl CheckoutObserver for RecordingObserver {
    fn on_change(&self, snapshot: &CheckoutSnapshot) {
        self.snapshots.borrow_mut().push(snapshot.clone());
    }
}
