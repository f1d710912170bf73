//! Checkout Modal
//!
//! Renders one open checkout session. All state lives in the
//! [`CheckoutController`]; this component only forwards user input to it and
//! re-renders from the snapshot its observer publishes.

use leptos::prelude::*;

use checkout_core::{CheckoutController, CheckoutSnapshot, Package, PaymentMethodData};

use crate::stripe::{CardMount, StripeJs};

const CARD_ELEMENT_ID: &str = "card-element";

#[component]
pub fn CheckoutModal(
    package: Package,
    controller: StoredValue<CheckoutController, LocalStorage>,
    stripe: StoredValue<Option<StripeJs>, LocalStorage>,
    snapshot: RwSignal<CheckoutSnapshot>,
    billing: Signal<PaymentMethodData>,
) -> impl IntoView {
    let card_host = NodeRef::<leptos::html::Div>::new();
    let card = StoredValue::new_local(None::<CardMount>);

    // Mount the card input once its host div exists
    Effect::new(move |_| {
        if card_host.get().is_none() || card.with_value(Option::is_some) {
            return;
        }
        let Some(stripe) = stripe.get_value() else {
            return;
        };

        let mounted = stripe.mount_card(&format!("#{CARD_ELEMENT_ID}"), move |complete| {
            controller.try_with_value(|c| c.on_payment_method_changed(complete));
        });
        match mounted {
            Ok(mount) => {
                let confirmer = mount.confirmer(&stripe);
                card.set_value(Some(mount));
                controller.with_value(|c| c.attach_confirmer(std::rc::Rc::new(confirmer)));
            }
            Err(e) => leptos::logging::error!("Card input unavailable: {}", e),
        }
    });

    on_cleanup(move || {
        controller.try_with_value(CheckoutController::detach_confirmer);
        if let Some(mount) = card.try_update_value(Option::take).flatten() {
            mount.destroy();
        }
    });

    let pay_package = package.clone();
    let pay = move |_| {
        let Some(controller) = controller.try_get_value() else {
            return;
        };
        let package = pay_package.clone();
        let method = billing.get_untracked();
        leptos::task::spawn_local(async move {
            controller.submit_payment(&package, &method).await;
        });
    };

    let close = move |_| controller.with_value(CheckoutController::close);

    let price = package.display_price();
    let pay_label = move || {
        if snapshot.with(|s| s.is_loading) {
            "Processing…".to_string()
        } else {
            format!("Pay {price}")
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal" role="dialog">
                <header class="modal-header">
                    <h2>"Checkout"</h2>
                    <button class="modal-close" on:click=close>"×"</button>
                </header>

                <div class="summary">
                    <span class="coins">{format!("🪙 {} coins", package.coins())}</span>
                    <span class="price">{package.display_price()}</span>
                </div>

                <div class="field">
                    <label>"Card details"</label>
                    <div id=CARD_ELEMENT_ID class="card-element" node_ref=card_host></div>
                </div>

                <Show when=move || snapshot.with(|s| s.last_error.is_some())>
                    <p class="error">
                        {move || snapshot.with(|s| s.last_error.clone().unwrap_or_default())}
                    </p>
                </Show>

                <Show when=move || snapshot.with(|s| !s.confirmer_ready)>
                    <p class="hint">"Payment form is loading…"</p>
                </Show>

                <button
                    class="btn btn-primary pay"
                    on:click=pay
                    disabled=move || !snapshot.with(CheckoutSnapshot::pay_enabled)
                >
                    {pay_label}
                </button>
            </div>
        </div>
    }
}
