//! Registration page.
//!
//! The form gate in `util::forms` runs before `AuthManager::register`, so a
//! mismatched confirmation, short password, or unchecked terms box is
//! reported without a request.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::app::AppAuth;
use crate::components::route_guard::RouteGuard;
use crate::net::identity::{AuthError, AuthErrorKind};
use crate::net::types::RegisterRequest;
use crate::state::auth::AuthState;
use crate::util::auth::ViewAccess;
use crate::util::forms::submit_registration;

/// Inline messages for a failed registration, one per line.
fn registration_error_lines(err: &AuthError) -> Vec<String> {
    match err.kind() {
        AuthErrorKind::Network => vec!["Registration failed. Please try again.".to_owned()],
        AuthErrorKind::Validation => {
            let fields = err.field_messages();
            if fields.is_empty() { vec![err.to_string()] } else { fields }
        }
        _ => vec![err.to_string()],
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let state: Signal<AuthState> = auth.state().into();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let accepted_terms = RwSignal::new(false);
    let errors = RwSignal::new(Vec::<String>::new());

    let on_submit = Callback::new(move |()| {
        if state.get_untracked().loading {
            return;
        }
        errors.set(Vec::new());
        let auth = auth.clone();
        let request = RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        let accepted = accepted_terms.get_untracked();
        leptos::task::spawn_local(async move {
            if let Err(err) = submit_registration(&auth, request, accepted).await {
                errors.set(registration_error_lines(&err));
            }
        });
    });

    view! {
        <RouteGuard access=ViewAccess::GuestOnly waiting="Creating your account...">
            <div class="login-page">
                <div class="login-card">
                    <h1>"Join AuthFlow"</h1>
                    <p class="login-card__subtitle">"Create your account and start your journey"</p>
                    <Show when=move || !errors.get().is_empty()>
                        <ul class="login-message login-message--error" role="alert">
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|line| view! { <li>{line}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                    <form
                        class="login-form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    >
                        <label class="login-label" for="register-name">"Full Name"</label>
                        <input
                            id="register-name"
                            class="login-input"
                            type="text"
                            autocomplete="name"
                            placeholder="Enter your full name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <label class="login-label" for="register-email">"Email Address"</label>
                        <input
                            id="register-email"
                            class="login-input"
                            type="email"
                            autocomplete="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <label class="login-label" for="register-password">"Password"</label>
                        <input
                            id="register-password"
                            class="login-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="At least 8 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <label class="login-label" for="register-confirm">"Confirm Password"</label>
                        <input
                            id="register-confirm"
                            class="login-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Repeat your password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <label class="login-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || accepted_terms.get()
                                on:change=move |ev| accepted_terms.set(event_target_checked(&ev))
                            />
                            " I agree to the " <a href="#">"Terms of Service"</a> " and "
                            <a href="#">"Privacy Policy"</a>
                        </label>
                        <button class="login-button" type="submit" disabled=move || state.get().loading>
                            "Create Account"
                        </button>
                    </form>
                    <p class="login-card__footer">
                        "Already have an account? " <a href="/login">"Sign in"</a>
                    </p>
                </div>
            </div>
        </RouteGuard>
    }
}
