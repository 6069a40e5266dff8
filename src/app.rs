//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpIdentityClient;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthManager;
use crate::state::session::LocalStorageSessionStore;

/// The concrete manager provided to every page.
pub type AppAuth = AuthManager<HttpIdentityClient, LocalStorageSessionStore>;

/// Build the process-wide auth manager from configuration.
pub fn build_auth(config: &ClientConfig) -> AppAuth {
    AuthManager::new(HttpIdentityClient::new(config), LocalStorageSessionStore::new(&config.token_key))
}

/// Root application component.
///
/// Constructs the auth manager exactly once, provides it via context, and
/// starts the initial session check.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let auth = build_auth(&config);
    provide_context(auth.clone());

    leptos::task::spawn_local(async move {
        auth.initialize().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/authflow.css"/>
        <Title text="AuthFlow"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
