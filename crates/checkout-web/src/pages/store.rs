//! Store Page

use std::rc::Rc;

use leptos::prelude::*;

use checkout_core::{CheckoutController, CheckoutSnapshot, HttpIntentBackend, Package};

use crate::components::{CheckoutModal, Toast, ToastNotifier};
use crate::config::WebConfig;
use crate::observer::SignalObserver;
use crate::packages::{FEATURED_COINS, catalog};
use crate::pages::Profile;
use crate::stripe::StripeJs;

#[component]
pub fn StorePage(profile: RwSignal<Profile>, toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    let config = WebConfig::load();
    let snapshot = RwSignal::new(CheckoutSnapshot::default());
    let selected = RwSignal::new(None::<Package>);

    let controller = CheckoutController::new(
        Rc::new(HttpIntentBackend::new(&config.backend())),
        Rc::new(ToastNotifier::new(toasts)),
    )
    .with_observer(Rc::new(SignalObserver::new(snapshot)))
    .with_config(config.checkout.clone());
    let controller = StoredValue::new_local(controller);
    let stripe = StoredValue::new_local(config.publishable_key.as_deref().and_then(StripeJs::load));

    on_cleanup(move || {
        controller.try_with_value(CheckoutController::close);
    });

    let packages = match catalog() {
        Ok(packages) => packages,
        Err(e) => {
            leptos::logging::error!("Invalid package catalog: {}", e);
            Vec::new()
        }
    };

    let buy = move |package: Package| {
        selected.set(Some(package));
        controller.with_value(CheckoutController::open);
    };

    let billing = Signal::derive(move || profile.with(Profile::billing));

    view! {
        <div class="store">
            <h1>"Buy Coins"</h1>
            <p class="subtitle">"Top up your balance in seconds"</p>

            <Show when=move || stripe.with_value(Option::is_none)>
                <p class="notice">"Payments are unavailable right now."</p>
            </Show>

            <div class="plans">
                {packages
                    .into_iter()
                    .map(|package| {
                        let featured = package.coins() == FEATURED_COINS;
                        let choice = package.clone();
                        view! {
                            <div class="plan" class:featured=featured>
                                <Show when=move || featured>
                                    <span class="badge">"Best value"</span>
                                </Show>
                                <h2>{format!("🪙 {}", package.coins())}</h2>
                                <div class="price">{package.display_price()}</div>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| buy(choice.clone())
                                >
                                    "Buy"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || snapshot.with(|s| s.is_open)>
                {move || {
                    selected
                        .get()
                        .map(|package| {
                            view! {
                                <CheckoutModal
                                    package=package
                                    controller=controller
                                    stripe=stripe
                                    snapshot=snapshot
                                    billing=billing
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
