//! Shared route-guard policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies the same redirect rules, decided here from auth state
//! alone so pages never embed their own redirect effects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Which sessions a route admits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAccess {
    /// Requires a signed-in user (dashboard).
    Protected,
    /// Entry, login, and registration views; signed-in users are sent on.
    GuestOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is unresolved: show a placeholder, do not redirect.
    Wait,
    Render,
    Redirect(&'static str),
}

pub fn guard_decision(state: &AuthState, access: ViewAccess) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    match (access, state.is_authenticated()) {
        (ViewAccess::Protected, false) => GuardDecision::Redirect(LOGIN_PATH),
        (ViewAccess::GuestOnly, true) => GuardDecision::Redirect(DASHBOARD_PATH),
        _ => GuardDecision::Render,
    }
}

/// Navigate away whenever the settled auth state disallows `access`.
pub fn install_guard_redirect<F>(state: Signal<AuthState>, access: ViewAccess, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(target) = guard_decision(&state.get(), access) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
