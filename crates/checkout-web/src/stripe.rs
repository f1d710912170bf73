//! Stripe.js Integration
//!
//! Raw `wasm-bindgen` bindings to the parts of Stripe.js v3 the checkout
//! uses (card element + `confirmCardPayment`), and the [`PaymentConfirmer`]
//! built on them. Stripe.js itself is loaded by a `<script>` tag in
//! `index.html`; when it is missing no confirmer is ever attached and the pay
//! button stays disabled.

#![allow(unsafe_code)]

use async_trait::async_trait;
use gloo_utils::format::JsValueSerdeExt;
use js_sys::{Object, Promise, Reflect};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use checkout_core::{
    CheckoutError, ClientSecret, ConfirmResult, PaymentConfirmer, PaymentMethodData,
    ProviderError, Result,
};

#[wasm_bindgen]
extern "C" {
    /// Stripe.js client handle
    #[derive(Debug, Clone)]
    pub type JsStripe;

    /// Elements factory handle
    #[derive(Debug, Clone)]
    pub type JsElements;

    /// Mounted card input
    #[derive(Debug, Clone)]
    pub type JsCardElement;

    /// `Stripe(publishableKey)`
    #[wasm_bindgen(catch, js_name = Stripe, js_namespace = window)]
    fn new_stripe(publishable_key: &str) -> std::result::Result<JsStripe, JsValue>;

    /// `stripe.elements()`
    #[wasm_bindgen(method, catch)]
    fn elements(this: &JsStripe) -> std::result::Result<JsElements, JsValue>;

    /// `elements.create("card", options)`
    #[wasm_bindgen(method, catch, js_name = create)]
    fn create_element(
        this: &JsElements,
        element_type: &str,
        options: &JsValue,
    ) -> std::result::Result<JsCardElement, JsValue>;

    /// `card.mount(selector)`
    #[wasm_bindgen(method, catch)]
    fn mount(this: &JsCardElement, selector: &str) -> std::result::Result<(), JsValue>;

    /// `card.on(event, handler)`
    #[wasm_bindgen(method)]
    fn on(this: &JsCardElement, event: &str, handler: &Closure<dyn FnMut(JsValue)>);

    /// `card.destroy()`
    #[wasm_bindgen(method)]
    fn destroy(this: &JsCardElement);

    /// `stripe.confirmCardPayment(clientSecret, data)` → `Promise`
    #[wasm_bindgen(method, catch, js_name = confirmCardPayment)]
    fn confirm_card_payment(
        this: &JsStripe,
        client_secret: &str,
        data: &JsValue,
    ) -> std::result::Result<Promise, JsValue>;
}

fn js_error(context: &str, value: &JsValue) -> CheckoutError {
    CheckoutError::Confirmation(format!("{context}: {value:?}"))
}

/// Card element `change` event payload
#[derive(Debug, Default, Deserialize)]
struct CardChange {
    #[serde(default)]
    complete: bool,
    #[serde(default)]
    error: Option<ProviderError>,
}

/// Loaded Stripe.js client
#[derive(Clone, Debug)]
pub struct StripeJs {
    stripe: JsStripe,
}

impl StripeJs {
    /// Instantiate Stripe.js, or `None` if the script isn't on the page
    pub fn load(publishable_key: &str) -> Option<Self> {
        let window = web_sys::window()?;
        let present = Reflect::has(window.as_ref(), &JsValue::from_str("Stripe")).unwrap_or(false);
        if !present {
            leptos::logging::warn!("Stripe.js not loaded; payments disabled");
            return None;
        }

        match new_stripe(publishable_key) {
            Ok(stripe) => Some(Self { stripe }),
            Err(e) => {
                leptos::logging::error!("Stripe init failed: {:?}", e);
                None
            }
        }
    }

    /// Create a card element, mount it at `selector` and report completeness
    /// changes to `on_complete`
    pub fn mount_card(
        &self,
        selector: &str,
        mut on_complete: impl FnMut(bool) + 'static,
    ) -> Result<CardMount> {
        let elements = self
            .stripe
            .elements()
            .map_err(|e| js_error("elements()", &e))?;
        let card = elements
            .create_element("card", &Object::new())
            .map_err(|e| js_error("elements.create(card)", &e))?;
        card.mount(selector)
            .map_err(|e| js_error("card.mount", &e))?;

        let listener = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let change: CardChange = event.into_serde().unwrap_or_default();
            if let Some(error) = &change.error {
                leptos::logging::log!("Card input: {}", error.message);
            }
            on_complete(change.complete);
        });
        card.on("change", &listener);

        Ok(CardMount {
            card,
            _listener: listener,
        })
    }
}

/// A mounted card element; keeps its change listener alive
pub struct CardMount {
    card: JsCardElement,
    _listener: Closure<dyn FnMut(JsValue)>,
}

impl CardMount {
    /// Confirmer bound to this card input
    pub fn confirmer(&self, stripe: &StripeJs) -> StripeConfirmer {
        StripeConfirmer {
            stripe: stripe.stripe.clone(),
            card: self.card.clone(),
        }
    }

    pub fn destroy(self) {
        self.card.destroy();
    }
}

/// Confirms card payments through `stripe.confirmCardPayment`
pub struct StripeConfirmer {
    stripe: JsStripe,
    card: JsCardElement,
}

impl StripeConfirmer {
    /// `{ payment_method: { card, billing_details } }`
    fn payment_data(&self, method: &PaymentMethodData) -> Result<JsValue> {
        let billing = JsValue::from_serde(&method.billing_details)?;

        let payment_method = Object::new();
        Reflect::set(&payment_method, &JsValue::from_str("card"), self.card.as_ref())
            .map_err(|e| js_error("payment_method.card", &e))?;
        Reflect::set(&payment_method, &JsValue::from_str("billing_details"), &billing)
            .map_err(|e| js_error("payment_method.billing_details", &e))?;

        let data = Object::new();
        Reflect::set(&data, &JsValue::from_str("payment_method"), &payment_method)
            .map_err(|e| js_error("payment_method", &e))?;
        Ok(data.into())
    }
}

#[async_trait(?Send)]
impl PaymentConfirmer for StripeConfirmer {
    async fn confirm(
        &self,
        secret: &ClientSecret,
        method: &PaymentMethodData,
    ) -> Result<ConfirmResult> {
        let data = self.payment_data(method)?;
        let promise = self
            .stripe
            .confirm_card_payment(secret.expose(), &data)
            .map_err(|e| js_error("confirmCardPayment", &e))?;
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("confirmCardPayment rejected", &e))?;

        value
            .into_serde::<ConfirmResult>()
            .map_err(|e| CheckoutError::MalformedResponse(e.to_string()))
    }

    fn name(&self) -> &str {
        "Stripe"
    }
}
