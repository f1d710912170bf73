//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Toast, Toaster};
use crate::pages::{Profile, ProfilePage, StorePage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let profile = RwSignal::new(Profile::default());
    let toasts = RwSignal::new(Vec::<Toast>::new());

    view! {
        <Router>
            <nav class="nav">
                <A href="/">"Store"</A>
                <A href="/profile">"Profile"</A>
            </nav>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=move || view! { <StorePage profile=profile toasts=toasts /> } />
                    <Route path=path!("/profile") view=move || view! { <ProfilePage profile=profile /> } />
                </Routes>
            </main>
            <Toaster toasts=toasts />
        </Router>
    }
}
