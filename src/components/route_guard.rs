//! Route wrapper applying the shared redirect policy.
//!
//! DESIGN
//! ======
//! Pages create their own signals before wrapping content in `RouteGuard`, so
//! form input and error text survive the placeholder swap while an auth call
//! is in flight.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppAuth;
use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, ViewAccess, guard_decision, install_guard_redirect};

#[component]
pub fn RouteGuard(
    access: ViewAccess,
    #[prop(into, default = "Loading...".to_owned())] waiting: String,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let state: Signal<AuthState> = auth.state().into();
    install_guard_redirect(state, access, use_navigate());

    move || match guard_decision(&state.get(), access) {
        GuardDecision::Wait => view! { <LoadingScreen message=waiting.clone()/> }.into_any(),
        GuardDecision::Render => children(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
