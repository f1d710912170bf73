//! Toast Notifications

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use checkout_core::{Notification, NotificationLevel, Notifier};

/// How long a toast stays on screen
const TOAST_MILLIS: u32 = 4_000;

/// A toast currently on screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

impl Toast {
    fn class(&self) -> &'static str {
        match self.level {
            NotificationLevel::Success => "toast toast-success",
            NotificationLevel::Error => "toast toast-error",
        }
    }
}

/// `Notifier` that pushes toasts into a reactive list
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: Cell<u64>,
}

impl ToastNotifier {
    pub const fn new(toasts: RwSignal<Vec<Toast>>) -> Self {
        Self {
            toasts,
            next_id: Cell::new(0),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                level: notification.level,
                message: notification.message,
            });
        });

        let toasts = self.toasts;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            toasts.try_update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }
}

/// Renders the toast stack
#[component]
pub fn Toaster(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toaster">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.class()
                            on:click=move |_| toasts.update(|toasts| toasts.retain(|t| t.id != id))
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
