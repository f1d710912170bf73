//! Reactive bridge from the checkout controller to the view

use leptos::prelude::*;

use checkout_core::{CheckoutObserver, CheckoutSnapshot};

/// Mirrors every published snapshot into a signal
pub struct SignalObserver {
    snapshot: RwSignal<CheckoutSnapshot>,
}

impl SignalObserver {
    pub const fn new(snapshot: RwSignal<CheckoutSnapshot>) -> Self {
        Self { snapshot }
    }
}

impl CheckoutObserver for SignalObserver {
    fn on_change(&self, snapshot: &CheckoutSnapshot) {
        // The page may already be torn down when a late close arrives
        if self.snapshot.try_set(snapshot.clone()).is_some() {
            leptos::logging::debug_warn!("checkout snapshot dropped: view disposed");
        }
    }
}
