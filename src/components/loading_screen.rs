//! Placeholder shown while auth state is unresolved.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(into, default = "Loading...".to_owned())] message: String) -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__message">{message}</p>
        </div>
    }
}
