//! Dashboard page: the protected landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the signed-in profile and offers logout and profile refresh. Access
//! control lives entirely in `RouteGuard`; logout simply clears auth state and
//! the guard sends the visitor to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::app::AppAuth;
use crate::components::route_guard::RouteGuard;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::util::auth::ViewAccess;
use crate::util::dates::format_member_since;

fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}!", user.name),
        None => "Welcome back!".to_owned(),
    }
}

/// Uppercase initials for the avatar badge, at most two letters.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AppAuth>();
    let state: Signal<AuthState> = auth.state().into();
    let refreshing = RwSignal::new(false);
    let user = move || state.get().user;

    let on_logout = Callback::new({
        let auth = auth.clone();
        move |()| {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                auth.logout().await;
            });
        }
    });

    let on_refresh = Callback::new(move |()| {
        if refreshing.get_untracked() {
            return;
        }
        refreshing.set(true);
        let auth = auth.clone();
        leptos::task::spawn_local(async move {
            auth.refresh().await;
            refreshing.set(false);
        });
    });

    view! {
        <RouteGuard access=ViewAccess::Protected waiting="Loading your dashboard...">
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <div>
                        <h2 class="dashboard-page__title">{move || greeting(user().as_ref())}</h2>
                        <p class="dashboard-page__subtitle">"Here's what's happening with your account today."</p>
                    </div>
                    <button class="btn dashboard-page__logout" on:click=move |_| on_logout.run(()) title="Logout">
                        "Logout"
                    </button>
                </header>

                <section class="profile-card">
                    <h3 class="profile-card__title">"Personal Information"</h3>
                    <div class="profile-card__identity">
                        <span class="profile-card__avatar" aria-hidden="true">
                            {move || user().map(|u| initials(&u.name)).unwrap_or_default()}
                        </span>
                        <div>
                            <p class="profile-card__name">{move || user().map(|u| u.name).unwrap_or_default()}</p>
                            <p class="profile-card__email">{move || user().map(|u| u.email).unwrap_or_default()}</p>
                        </div>
                    </div>
                    <dl class="profile-card__details">
                        <dt>"User ID:"</dt>
                        <dd>{move || user().map(|u| u.id).unwrap_or_default()}</dd>
                        <dt>"Member Since:"</dt>
                        <dd>
                            {move || {
                                user()
                                    .map(|u| format_member_since(&u.created_at))
                                    .unwrap_or_else(|| "N/A".to_owned())
                            }}
                        </dd>
                    </dl>
                </section>

                <section class="quick-actions">
                    <h3 class="quick-actions__title">"Quick Actions"</h3>
                    <button
                        class="btn quick-actions__refresh"
                        on:click=move |_| on_refresh.run(())
                        disabled=move || refreshing.get()
                    >
                        {move || if refreshing.get() { "Refreshing..." } else { "Refresh Profile" }}
                    </button>
                </section>
            </div>
        </RouteGuard>
    }
}
