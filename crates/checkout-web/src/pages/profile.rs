//! Profile Page
//!
//! Local-only profile editor. The profile also supplies the billing details
//! attached to card payments.

use leptos::prelude::*;

use checkout_core::PaymentMethodData;

/// Buyer profile held in memory for the session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub display_name: String,
    pub email: String,
    pub bio: String,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl Profile {
    /// Billing details for the card; blank fields are omitted
    pub fn billing(&self) -> PaymentMethodData {
        PaymentMethodData::for_customer(non_empty(&self.display_name), non_empty(&self.email))
    }
}

#[component]
pub fn ProfilePage(profile: RwSignal<Profile>) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let draft = RwSignal::new(profile.get_untracked());

    let edit = move |_| {
        draft.set(profile.get());
        set_editing.set(true);
    };
    let cancel = move |_| {
        draft.set(profile.get());
        set_editing.set(false);
    };
    let save = move |_| {
        let updated = draft.get();
        leptos::logging::log!("Profile saved: {:?}", updated);
        profile.set(updated);
        set_editing.set(false);
    };

    view! {
        <div class="profile">
            <h1>"Profile"</h1>

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <dl class="profile-view">
                        <dt>"Display name"</dt>
                        <dd>{move || profile.with(|p| p.display_name.clone())}</dd>
                        <dt>"Email"</dt>
                        <dd>{move || profile.with(|p| p.email.clone())}</dd>
                        <dt>"Bio"</dt>
                        <dd>{move || profile.with(|p| p.bio.clone())}</dd>
                    </dl>
                    <button class="btn" on:click=edit>"Edit"</button>
                }
            >
                <form class="profile-form" on:submit=|ev| ev.prevent_default()>
                    <div class="field">
                        <label>"Display name"</label>
                        <input
                            type="text"
                            prop:value=move || draft.with(|p| p.display_name.clone())
                            on:input=move |ev| draft.update(|p| p.display_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Email"</label>
                        <input
                            type="email"
                            prop:value=move || draft.with(|p| p.email.clone())
                            on:input=move |ev| draft.update(|p| p.email = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Bio"</label>
                        <textarea
                            prop:value=move || draft.with(|p| p.bio.clone())
                            on:input=move |ev| draft.update(|p| p.bio = event_target_value(&ev))
                        ></textarea>
                    </div>
                    <div class="actions">
                        <button type="button" class="btn" on:click=cancel>"Cancel"</button>
                        <button type="button" class="btn btn-primary" on:click=save>"Save"</button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_from_profile() {
        let profile = Profile {
            display_name: "  Ada Lovelace ".into(),
            email: "ada@example.com".into(),
            bio: "Analyst".into(),
        };
        let billing = profile.billing().billing_details;
        assert_eq!(billing.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(billing.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_blank_profile_sends_no_billing_details() {
        assert_eq!(Profile::default().billing(), PaymentMethodData::default());
    }
}
