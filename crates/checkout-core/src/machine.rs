//! Checkout State Machine
//!
//! Orchestrates one payment attempt at a time:
//!
//! ```text
//!   Idle ──complete──▶ Ready ──submit──▶ Submitting ──▶ Succeeded ──▶ (closed)
//!    ▲                  ▲  │                  │
//!    └───incomplete─────┘  │                  └──────▶ Failed ──retry──▶ Submitting
//! ```
//!
//! The controller is single-threaded (`Rc<RefCell<_>>`): the only suspension
//! points are the intent request and the confirmation call, and no borrow is
//! held across either of them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::backend::IntentBackend;
use crate::config::CheckoutConfig;
use crate::confirm::{PaymentConfirmer, PaymentMethodData};
use crate::error::CheckoutError;
use crate::notify::{CheckoutObserver, NoopObserver, Notification, Notifier};
use crate::package::Package;
use crate::session::{CheckoutPhase, CheckoutSnapshot, SessionId, SessionState};
use crate::wire::ConfirmResult;

/// Why a submit request did nothing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No open session
    Closed,
    PaymentMethodIncomplete,
    /// Another attempt is in flight
    InFlight,
    /// Payment provider not initialized yet
    ConfirmerUnavailable,
}

/// Result of one `submit_payment` call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded { payment_intent_id: Option<String> },
    /// Provider refused the charge; carries its message verbatim
    Declined { message: String },
    /// Transport failure or non-success status; carries the shown message
    Failed { message: String },
    /// Guard rejected the call; state untouched
    Skipped(SkipReason),
    /// Session was closed before the result arrived
    Discarded,
}

/// Provider-level answer to one attempt, before it is applied to the session
enum Verdict {
    Succeeded { payment_intent_id: Option<String> },
    Declined(String),
    NotCompleted(String),
    Transport(CheckoutError),
}

/// Checkout controller
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct CheckoutController {
    state: Rc<RefCell<SessionState>>,
    confirmer: Rc<RefCell<Option<Rc<dyn PaymentConfirmer>>>>,
    backend: Rc<dyn IntentBackend>,
    notifier: Rc<dyn Notifier>,
    observer: Rc<dyn CheckoutObserver>,
    config: Rc<CheckoutConfig>,
}

impl CheckoutController {
    /// Create a controller with no confirmer attached
    pub fn new(backend: Rc<dyn IntentBackend>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            state: Rc::new(RefCell::new(SessionState::default())),
            confirmer: Rc::new(RefCell::new(None)),
            backend,
            notifier,
            observer: Rc::new(NoopObserver),
            config: Rc::new(CheckoutConfig::default()),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Rc<dyn CheckoutObserver>) -> Self {
        self.observer = observer;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: CheckoutConfig) -> Self {
        self.config = Rc::new(config);
        self
    }

    #[must_use]
    pub fn with_confirmer(self, confirmer: Rc<dyn PaymentConfirmer>) -> Self {
        *self.confirmer.borrow_mut() = Some(confirmer);
        self
    }

    /// Attach the payment confirmer once the provider is loaded
    pub fn attach_confirmer(&self, confirmer: Rc<dyn PaymentConfirmer>) {
        tracing::debug!(provider = confirmer.name(), "Payment confirmer attached");
        *self.confirmer.borrow_mut() = Some(confirmer);
        self.publish();
    }

    pub fn detach_confirmer(&self) {
        *self.confirmer.borrow_mut() = None;
        self.publish();
    }

    pub fn snapshot(&self) -> CheckoutSnapshot {
        let confirmer_ready = self.confirmer.borrow().is_some();
        self.state.borrow().snapshot(confirmer_ready)
    }

    /// Open a fresh session, discarding anything left from the previous one
    pub fn open(&self) {
        let session = SessionState::opened();
        if let Some(id) = &session.id {
            tracing::info!(session_id = %id, "Checkout opened");
        }
        *self.state.borrow_mut() = session;
        self.publish();
    }

    /// Close the session. In-flight network calls keep running; their results
    /// are discarded.
    pub fn close(&self) {
        let previous = std::mem::take(&mut *self.state.borrow_mut());
        if let Some(id) = previous.id {
            if previous.is_loading {
                tracing::warn!(session_id = %id, "Checkout closed with an attempt in flight");
            } else {
                tracing::info!(session_id = %id, "Checkout closed");
            }
        }
        self.publish();
    }

    /// Completeness signal from the payment-method input
    pub fn on_payment_method_changed(&self, is_complete: bool) {
        {
            let mut state = self.state.borrow_mut();
            if !state.is_open() {
                tracing::debug!("Payment method change ignored: checkout closed");
                return;
            }
            state.is_payment_method_complete = is_complete;
            if state.phase != CheckoutPhase::Submitting {
                state.phase = state.resting_phase();
            }
        }
        self.publish();
    }

    /// Run one payment attempt for `package`.
    ///
    /// A no-op unless the pay control is enabled. Every attempt requests a
    /// new intent secret; nothing is retried automatically.
    pub async fn submit_payment(
        &self,
        package: &Package,
        method: &PaymentMethodData,
    ) -> SubmitOutcome {
        let (session_id, confirmer) = match self.begin_attempt() {
            Ok(attempt) => attempt,
            Err(reason) => {
                tracing::debug!(?reason, "Payment submit skipped");
                return SubmitOutcome::Skipped(reason);
            }
        };

        tracing::info!(
            session_id = %session_id,
            coins = package.coins(),
            price = %package.price(),
            provider = confirmer.name(),
            "Submitting payment"
        );

        let Some(verdict) = self
            .run_attempt(&session_id, confirmer.as_ref(), package, method)
            .await
        else {
            tracing::warn!(session_id = %session_id, "Checkout closed before confirmation; attempt dropped");
            return SubmitOutcome::Discarded;
        };
        self.finish_attempt(&session_id, verdict)
    }

    fn begin_attempt(&self) -> Result<(SessionId, Rc<dyn PaymentConfirmer>), SkipReason> {
        let confirmer = self.confirmer.borrow().clone();
        let attempt = {
            let mut state = self.state.borrow_mut();
            let id = state.id.clone().ok_or(SkipReason::Closed)?;
            if state.is_loading {
                return Err(SkipReason::InFlight);
            }
            if !state.is_payment_method_complete {
                return Err(SkipReason::PaymentMethodIncomplete);
            }
            let confirmer = confirmer.ok_or(SkipReason::ConfirmerUnavailable)?;

            state.phase = CheckoutPhase::Submitting;
            state.is_loading = true;
            state.last_error = None;
            (id, confirmer)
        };
        self.publish();
        Ok(attempt)
    }

    async fn run_attempt(
        &self,
        session_id: &SessionId,
        confirmer: &dyn PaymentConfirmer,
        package: &Package,
        method: &PaymentMethodData,
    ) -> Option<Verdict> {
        let amount = match package.amount_minor() {
            Ok(amount) => amount,
            Err(e) => return Some(Verdict::Transport(e)),
        };

        let secret = match self.backend.create_intent(amount).await {
            Ok(secret) => secret,
            Err(e) => return Some(Verdict::Transport(e)),
        };

        // Nothing has been charged yet; don't start a confirmation nobody is
        // waiting for.
        if !self.state.borrow().is_current(session_id) {
            return None;
        }

        let verdict = match confirmer.confirm(&secret, method).await {
            Ok(result) => self.classify(result),
            Err(e) => Verdict::Transport(e),
        };
        Some(verdict)
    }

    /// Branch on `error` first, then on the intent status
    fn classify(&self, result: ConfirmResult) -> Verdict {
        if let Some(error) = result.error {
            let message = if error.message.trim().is_empty() {
                self.config.decline_fallback_message.clone()
            } else {
                error.message
            };
            return Verdict::Declined(message);
        }

        match result.payment_intent {
            Some(intent) if intent.succeeded() => Verdict::Succeeded {
                payment_intent_id: intent.id,
            },
            Some(intent) => Verdict::NotCompleted(intent.status),
            None => Verdict::Transport(CheckoutError::MalformedResponse(
                "confirmation returned neither error nor paymentIntent".into(),
            )),
        }
    }

    fn finish_attempt(&self, session_id: &SessionId, verdict: Verdict) -> SubmitOutcome {
        let (outcome, notification) = {
            let mut state = self.state.borrow_mut();
            if !state.is_current(session_id) {
                tracing::warn!(session_id = %session_id, "Discarding payment result for closed checkout");
                return SubmitOutcome::Discarded;
            }

            state.is_loading = false;
            let (outcome, notification) = match verdict {
                Verdict::Succeeded { payment_intent_id } => {
                    tracing::info!(session_id = %session_id, payment_intent = ?payment_intent_id, "Payment succeeded");
                    state.phase = CheckoutPhase::Succeeded;
                    state.last_error = None;
                    (
                        SubmitOutcome::Succeeded { payment_intent_id },
                        Notification::success(self.config.success_message.clone()),
                    )
                }
                Verdict::Declined(message) => {
                    tracing::warn!(session_id = %session_id, reason = %message, "Payment declined");
                    state.phase = CheckoutPhase::Failed;
                    state.last_error = Some(message.clone());
                    (
                        SubmitOutcome::Declined { message: message.clone() },
                        Notification::error(message),
                    )
                }
                Verdict::NotCompleted(status) => {
                    tracing::warn!(session_id = %session_id, status = %status, "Payment not completed");
                    let message = self.config.incomplete_message(&status);
                    state.phase = CheckoutPhase::Failed;
                    state.last_error = Some(message.clone());
                    (
                        SubmitOutcome::Failed { message: message.clone() },
                        Notification::error(message),
                    )
                }
                Verdict::Transport(e) => {
                    tracing::error!(session_id = %session_id, error = %e, "Payment attempt failed");
                    let message = self.config.generic_failure_message.clone();
                    state.phase = CheckoutPhase::Failed;
                    state.last_error = Some(message.clone());
                    (
                        SubmitOutcome::Failed { message: message.clone() },
                        Notification::error(message),
                    )
                }
            };
            (outcome, notification)
        };

        self.publish();
        self.notifier.notify(notification);

        if matches!(outcome, SubmitOutcome::Succeeded { .. }) {
            self.close();
        }
        outcome
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        self.observer.on_change(&snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockConfirmer, MockIntentBackend, RecordingNotifier, RecordingObserver};
    use crate::notify::NotificationLevel;
    use rust_decimal_macros::dec;

    struct Harness {
        controller: CheckoutController,
        backend: Rc<MockIntentBackend>,
        confirmer: Rc<MockConfirmer>,
        notifier: Rc<RecordingNotifier>,
        observer: Rc<RecordingObserver>,
    }

    fn harness(backend: MockIntentBackend, confirmer: MockConfirmer) -> Harness {
        let backend = Rc::new(backend);
        let confirmer = Rc::new(confirmer);
        let notifier = Rc::new(RecordingNotifier::default());
        let observer = Rc::new(RecordingObserver::default());
        let controller = CheckoutController::new(backend.clone(), notifier.clone())
            .with_observer(observer.clone())
            .with_confirmer(confirmer.clone());
        Harness {
            controller,
            backend,
            confirmer,
            notifier,
            observer,
        }
    }

    fn ready(h: &Harness) {
        h.controller.open();
        h.controller.on_payment_method_changed(true);
    }

    fn coins_500() -> Package {
        Package::new(500, dec!(4.99)).unwrap()
    }

    #[tokio::test]
    async fn test_submit_is_noop_when_method_incomplete() {
        let h = harness(MockIntentBackend::new(), MockConfirmer::succeeding());
        h.controller.open();
        let before = h.controller.snapshot();

        let outcome = h
            .controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        assert_eq!(outcome, SubmitOutcome::Skipped(SkipReason::PaymentMethodIncomplete));
        assert_eq!(h.controller.snapshot(), before);
        assert_eq!(before.phase, CheckoutPhase::Idle);
        assert!(h.backend.requested_amounts().is_empty());
        assert!(h.notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_submit_is_noop_when_closed() {
        let h = harness(MockIntentBackend::new(), MockConfirmer::succeeding());
        let outcome = h
            .controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;
        assert_eq!(outcome, SubmitOutcome::Skipped(SkipReason::Closed));
        assert!(h.backend.requested_amounts().is_empty());
    }

    #[tokio::test]
    async fn test_success_closes_session_with_one_notification() {
        let h = harness(MockIntentBackend::new(), MockConfirmer::succeeding());
        ready(&h);

        let outcome = h
            .controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        assert!(matches!(outcome, SubmitOutcome::Succeeded { .. }));
        assert_eq!(h.backend.requested_amounts(), vec![499]);
        assert_eq!(
            h.observer.phases(),
            vec![
                CheckoutPhase::Idle,
                CheckoutPhase::Ready,
                CheckoutPhase::Submitting,
                CheckoutPhase::Succeeded,
                CheckoutPhase::Idle,
            ]
        );

        let notifications = h.notifier.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, NotificationLevel::Success);
        assert_eq!(notifications[0].message, "Payment successful! 🎉");

        let snapshot = h.controller.snapshot();
        assert!(!snapshot.is_open);
        assert!(!snapshot.is_loading);
    }

    #[tokio::test]
    async fn test_decline_keeps_session_open_with_provider_message() {
        let h = harness(
            MockIntentBackend::new(),
            MockConfirmer::declining("Your card was declined."),
        );
        ready(&h);
        let package = Package::new(100, dec!(1.00)).unwrap();

        let outcome = h
            .controller
            .submit_payment(&package, &PaymentMethodData::default())
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Declined {
                message: "Your card was declined.".into()
            }
        );
        assert_eq!(h.backend.requested_amounts(), vec![100]);

        let snapshot = h.controller.snapshot();
        assert!(snapshot.is_open);
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.phase, CheckoutPhase::Failed);
        assert_eq!(snapshot.last_error.as_deref(), Some("Your card was declined."));
        assert!(snapshot.pay_enabled());

        let notifications = h.notifier.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, NotificationLevel::Error);
        assert_eq!(notifications[0].message, "Your card was declined.");
    }

    #[tokio::test]
    async fn test_transport_failure_uses_generic_message() {
        let h = harness(MockIntentBackend::failing(500), MockConfirmer::succeeding());
        ready(&h);

        let outcome = h
            .controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        let generic = CheckoutConfig::default().generic_failure_message;
        assert_eq!(outcome, SubmitOutcome::Failed { message: generic.clone() });
        assert!(h.confirmer.confirmed_secrets().is_empty());

        let snapshot = h.controller.snapshot();
        assert_eq!(snapshot.phase, CheckoutPhase::Failed);
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.last_error, Some(generic));
        assert_eq!(h.notifier.notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_confirmer_error_is_transport_failure() {
        let h = harness(MockIntentBackend::new(), MockConfirmer::broken("script error"));
        ready(&h);

        let outcome = h
            .controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        let generic = CheckoutConfig::default().generic_failure_message;
        assert_eq!(outcome, SubmitOutcome::Failed { message: generic });
        assert!(!h.controller.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_non_succeeded_status_fails_attempt() {
        let h = harness(MockIntentBackend::new(), MockConfirmer::with_status("processing"));
        ready(&h);

        let outcome = h
            .controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "Payment was not completed (status: processing).".into()
            }
        );
        assert!(h.controller.snapshot().is_open);
    }

    #[tokio::test]
    async fn test_empty_provider_message_uses_fallback() {
        let h = harness(MockIntentBackend::new(), MockConfirmer::declining("  "));
        ready(&h);

        let outcome = h
            .controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Declined {
                message: "Your payment was declined.".into()
            }
        );
    }

    #[tokio::test]
    async fn test_retry_requests_fresh_secret() {
        let h = harness(
            MockIntentBackend::new(),
            MockConfirmer::declining("Your card was declined."),
        );
        ready(&h);
        let package = coins_500();

        h.controller
            .submit_payment(&package, &PaymentMethodData::default())
            .await;
        h.controller
            .submit_payment(&package, &PaymentMethodData::default())
            .await;

        let secrets = h.confirmer.confirmed_secrets();
        assert_eq!(secrets.len(), 2);
        assert_ne!(secrets[0], secrets[1]);
        assert_eq!(h.backend.requested_amounts(), vec![499, 499]);
    }

    #[tokio::test]
    async fn test_missing_confirmer_is_inert() {
        let backend = Rc::new(MockIntentBackend::new());
        let notifier = Rc::new(RecordingNotifier::default());
        let controller = CheckoutController::new(backend.clone(), notifier.clone());
        controller.open();
        controller.on_payment_method_changed(true);

        assert!(controller.snapshot().can_submit());
        assert!(!controller.snapshot().pay_enabled());

        let outcome = controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;
        assert_eq!(outcome, SubmitOutcome::Skipped(SkipReason::ConfirmerUnavailable));
        assert!(!controller.snapshot().is_loading);
        assert!(backend.requested_amounts().is_empty());

        controller.attach_confirmer(Rc::new(MockConfirmer::succeeding()));
        assert!(controller.snapshot().pay_enabled());
    }

    #[tokio::test]
    async fn test_close_during_intent_request_discards_result() {
        let backend = MockIntentBackend::new();
        let h = harness(backend, MockConfirmer::succeeding());
        let controller = h.controller.clone();
        h.backend.on_request(move || controller.close());
        ready(&h);

        let outcome = h
            .controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert!(h.confirmer.confirmed_secrets().is_empty());
        assert!(h.notifier.notifications().is_empty());
        assert_eq!(h.controller.snapshot(), CheckoutSnapshot {
            confirmer_ready: true,
            ..CheckoutSnapshot::default()
        });
    }

    #[tokio::test]
    async fn test_reopen_during_confirmation_leaves_new_session_untouched() {
        let h = harness(
            MockIntentBackend::new(),
            MockConfirmer::declining("Your card was declined."),
        );
        let controller = h.controller.clone();
        h.confirmer.on_confirm(move || {
            controller.close();
            controller.open();
        });
        ready(&h);

        let outcome = h
            .controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        assert_eq!(outcome, SubmitOutcome::Discarded);
        let snapshot = h.controller.snapshot();
        assert!(snapshot.is_open);
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.phase, CheckoutPhase::Idle);
        assert_eq!(snapshot.last_error, None);
        assert!(h.notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_reopen_resets_state() {
        let h = harness(
            MockIntentBackend::new(),
            MockConfirmer::declining("Your card was declined."),
        );
        ready(&h);
        h.controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;
        assert!(h.controller.snapshot().last_error.is_some());

        h.controller.close();
        h.controller.open();

        let snapshot = h.controller.snapshot();
        assert!(snapshot.is_open);
        assert!(!snapshot.is_loading);
        assert!(!snapshot.is_payment_method_complete);
        assert_eq!(snapshot.last_error, None);
        assert_eq!(snapshot.phase, CheckoutPhase::Idle);
    }

    #[tokio::test]
    async fn test_method_changes_toggle_ready() {
        let h = harness(MockIntentBackend::new(), MockConfirmer::succeeding());
        h.controller.on_payment_method_changed(true);
        assert!(!h.controller.snapshot().is_payment_method_complete);

        h.controller.open();
        h.controller.on_payment_method_changed(true);
        assert_eq!(h.controller.snapshot().phase, CheckoutPhase::Ready);
        h.controller.on_payment_method_changed(false);
        assert_eq!(h.controller.snapshot().phase, CheckoutPhase::Idle);
    }

    #[tokio::test]
    async fn test_pay_disabled_while_in_flight() {
        let h = harness(MockIntentBackend::new(), MockConfirmer::succeeding());
        let inner = Rc::new(RefCell::new(None));
        {
            let controller = h.controller.clone();
            let inner = inner.clone();
            h.backend.on_request(move || {
                let snapshot = controller.snapshot();
                *inner.borrow_mut() = Some((snapshot.is_loading, snapshot.pay_enabled()));
            });
        }
        ready(&h);

        h.controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        assert_eq!(*inner.borrow(), Some((true, false)));
    }

    #[tokio::test]
    async fn test_custom_config_messages() {
        let backend = Rc::new(MockIntentBackend::failing(502));
        let notifier = Rc::new(RecordingNotifier::default());
        let observer = Rc::new(RecordingObserver::default());
        let controller = CheckoutController::new(backend, notifier.clone())
            .with_observer(observer.clone())
            .with_confirmer(Rc::new(MockConfirmer::succeeding()))
            .with_config(CheckoutConfig {
                generic_failure_message: "Something went wrong.".into(),
                ..CheckoutConfig::default()
            });
        controller.open();
        controller.on_payment_method_changed(true);

        let outcome = controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "Something went wrong.".into()
            }
        );
        assert_eq!(notifier.notifications()[0].message, "Something went wrong.");

        let last = observer.snapshots().pop().unwrap();
        assert_eq!(last.phase, CheckoutPhase::Failed);
        assert_eq!(last.last_error.as_deref(), Some("Something went wrong."));
    }

    #[tokio::test]
    async fn test_unchargeable_price_fails_without_sticking() {
        let h = harness(MockIntentBackend::new(), MockConfirmer::succeeding());
        ready(&h);
        let package = Package::new(1, rust_decimal::Decimal::MAX).unwrap();

        let outcome = h
            .controller
            .submit_payment(&package, &PaymentMethodData::default())
            .await;

        let generic = CheckoutConfig::default().generic_failure_message;
        assert_eq!(outcome, SubmitOutcome::Failed { message: generic });
        assert!(h.backend.requested_amounts().is_empty());

        let snapshot = h.controller.snapshot();
        assert_eq!(snapshot.phase, CheckoutPhase::Failed);
        assert!(!snapshot.is_loading);
        assert!(snapshot.pay_enabled());
        assert_eq!(h.notifier.notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_skipped() {
        use std::future::Future;
        use std::task::{Context, Poll, Waker};

        let h = harness(MockIntentBackend::new(), MockConfirmer::succeeding());
        let second = Rc::new(RefCell::new(None));
        {
            let controller = h.controller.clone();
            let second = second.clone();
            h.backend.on_request(move || {
                let package = coins_500();
                let method = PaymentMethodData::default();
                let attempt = std::pin::pin!(controller.submit_payment(&package, &method));
                let mut cx = Context::from_waker(Waker::noop());
                if let Poll::Ready(outcome) = attempt.poll(&mut cx) {
                    *second.borrow_mut() = Some(outcome);
                }
            });
        }
        ready(&h);

        let first = h
            .controller
            .submit_payment(&coins_500(), &PaymentMethodData::default())
            .await;

        assert!(matches!(first, SubmitOutcome::Succeeded { .. }));
        assert_eq!(
            *second.borrow(),
            Some(SubmitOutcome::Skipped(SkipReason::InFlight))
        );
        assert_eq!(h.backend.requested_amounts(), vec![499]);
        assert_eq!(h.confirmer.confirmed_secrets().len(), 1);
        assert_eq!(h.notifier.notifications().len(), 1);
    }
}
