//! Entry page with links to sign in or register.

use leptos::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::util::auth::ViewAccess;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <RouteGuard access=ViewAccess::GuestOnly>
            <div class="home-page">
                <h1 class="home-page__title">"AuthFlow"</h1>
                <p class="home-page__tagline">"Sign in to pick up where you left off, or create an account in a minute."</p>
                <div class="home-page__actions">
                    <a class="login-button" href="/login">"Get Started"</a>
                    <a class="login-button login-button--secondary" href="/register">"Create Account"</a>
                </div>
                <ul class="home-page__features">
                    <li>"Token sessions that survive reloads"</li>
                    <li>"Profile and account details at a glance"</li>
                    <li>"One-click sign out on any device"</li>
                </ul>
            </div>
        </RouteGuard>
    }
}
