//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AppAuth;
use crate::components::route_guard::RouteGuard;
use crate::net::identity::{AuthError, AuthErrorKind};
use crate::state::auth::AuthState;
use crate::util::auth::ViewAccess;
use crate::util::forms::submit_login;

/// Inline message for a failed sign-in attempt.
fn login_error_message(err: &AuthError) -> String {
    match err.kind() {
        AuthErrorKind::Network => "Login failed. Please try again.".to_owned(),
        _ => err.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let state: Signal<AuthState> = auth.state().into();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = Callback::new(move |()| {
        if state.get_untracked().loading {
            return;
        }
        error.set(None);
        let auth = auth.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        leptos::task::spawn_local(async move {
            // Success needs no navigation here; the guard redirects.
            if let Err(err) = submit_login(&auth, &email_value, &password_value).await {
                error.set(Some(login_error_message(&err)));
            }
        });
    });

    view! {
        <RouteGuard access=ViewAccess::GuestOnly waiting="Signing in...">
            <div class="login-page">
                <div class="login-card">
                    <h1>"Welcome Back"</h1>
                    <p class="login-card__subtitle">"Sign in to your account to continue"</p>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <form
                        class="login-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    >
                        <label class="login-label" for="login-email">"Email Address"</label>
                        <input
                            id="login-email"
                            class="login-input"
                            type="email"
                            autocomplete="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <label class="login-label" for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            class="login-input"
                            type="password"
                            autocomplete="current-password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || state.get().loading>
                            "Sign In"
                        </button>
                    </form>
                    <p class="login-card__footer">
                        "Don't have an account? " <a href="/register">"Create one"</a>
                    </p>
                </div>
            </div>
        </RouteGuard>
    }
}
