//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthManager` is the single writer of `AuthState`. It is built once in
//! `App`, provided via context, and read by route guards and user-aware pages
//! through a read-only signal.
//!
//! LIFECYCLE
//! =========
//! State starts unknown (`loading`, no user), settles after `initialize`, and
//! drops back to a loading state with the user cleared while login, register,
//! or logout is in flight. Every exit path settles a consistent state before
//! returning, including error paths.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::net::identity::{AuthError, IdentityClient};
use crate::net::types::{AuthResponse, RegisterRequest, User};
use crate::state::session::SessionStore;

/// Logical phase derived from `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// Session check or auth call in flight.
    Unknown,
    Anonymous,
    Authenticated,
}

/// Authentication state tracking the current user and loading status.
///
/// `is_authenticated()` is derived from `user`, so the two cannot disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::unknown()
    }
}

impl AuthState {
    #[must_use]
    pub fn unknown() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Unknown
        } else if self.user.is_some() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Anonymous
        }
    }
}

/// Owner of the session lifecycle.
///
/// Clones share the same state, token, and collaborators. Overlapping
/// `login`/`register`/`logout` calls are not queued; callers disable their
/// triggers while `loading` is set.
pub struct AuthManager<C, S> {
    client: Arc<C>,
    store: Arc<S>,
    state: ArcRwSignal<AuthState>,
    token: Arc<Mutex<Option<String>>>,
    initialized: Arc<AtomicBool>,
    /// Bumped whenever a login, register, or logout starts or a session is
    /// dropped; results fetched under an older epoch are discarded.
    epoch: Arc<AtomicU64>,
}

impl<C, S> Clone for AuthManager<C, S> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            store: Arc::clone(&self.store),
            state: self.state.clone(),
            token: Arc::clone(&self.token),
            initialized: Arc::clone(&self.initialized),
            epoch: Arc::clone(&self.epoch),
        }
    }
}

impl<C, S> AuthManager<C, S>
where
    C: IdentityClient,
    S: SessionStore,
{
    pub fn new(client: C, store: S) -> Self {
        Self {
            client: Arc::new(client),
            store: Arc::new(store),
            state: ArcRwSignal::new(AuthState::unknown()),
            token: Arc::new(Mutex::new(None)),
            initialized: Arc::new(AtomicBool::new(false)),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Read-only subscription to auth state.
    pub fn state(&self) -> ArcReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Current state without registering a reactive dependency.
    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Resolve the stored session, once per manager.
    ///
    /// Any failure to validate a stored token (rejected or unreachable
    /// service) clears it and settles anonymous.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            log::debug!("auth: initialize called again; ignoring");
            return;
        }

        let Some(token) = self.store.read() else {
            log::debug!("auth: no stored session");
            self.state.set(AuthState::anonymous());
            return;
        };

        match self.client.fetch_current_user(&token).await {
            Ok(user) => {
                log::info!("auth: restored session for user {}", user.id);
                self.set_held_token(Some(token));
                self.state.set(AuthState::authenticated(user));
            }
            Err(err) => {
                log::warn!("auth: stored session rejected: {err}");
                self.drop_session();
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns the identity client's error unchanged; state is anonymous
    /// afterwards.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.begin();
        match self.client.login(email, password).await {
            Ok(resp) => Ok(self.open_session(resp)),
            Err(err) => {
                log::debug!("auth: login rejected ({:?})", err.kind());
                self.drop_session();
                Err(err)
            }
        }
    }

    /// Create an account and sign in to it.
    ///
    /// Password confirmation is not re-checked here; see
    /// `util::forms::submit_registration` for the gate callers run first.
    ///
    /// # Errors
    ///
    /// Returns the identity client's error unchanged; state is anonymous
    /// afterwards.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, AuthError> {
        self.begin();
        match self.client.register(request).await {
            Ok(resp) => Ok(self.open_session(resp)),
            Err(err) => {
                log::debug!("auth: register rejected ({:?})", err.kind());
                self.drop_session();
                Err(err)
            }
        }
    }

    /// End the session. Local state is always cleared, even when the
    /// server-side invalidation fails.
    pub async fn logout(&self) {
        self.begin();
        if let Some(token) = self.held_token().or_else(|| self.store.read()) {
            if let Err(err) = self.client.logout(&token).await {
                log::warn!("auth: remote logout failed, clearing local session anyway: {err}");
            }
        }
        self.drop_session();
        log::info!("auth: logged out");
    }

    /// Re-fetch the profile for the held session.
    ///
    /// Does not toggle `loading`, and is skipped while another auth call is
    /// in flight. An `Unauthorized` answer demotes to anonymous; transport
    /// failures keep the current state.
    pub async fn refresh(&self) -> Option<User> {
        if self.snapshot().loading {
            log::debug!("auth: refresh skipped while another auth call is in flight");
            return None;
        }
        let token = self.held_token()?;
        let epoch = self.epoch.load(Ordering::SeqCst);
        let result = self.client.fetch_current_user(&token).await;

        // A login, register, or logout may have started while the fetch was
        // in flight; its outcome wins.
        if self.epoch.load(Ordering::SeqCst) != epoch {
            log::debug!("auth: discarding stale profile refresh");
            return self.snapshot().user;
        }

        match result {
            Ok(user) => {
                self.state.set(AuthState::authenticated(user.clone()));
                Some(user)
            }
            Err(AuthError::Unauthorized) => {
                log::warn!("auth: session no longer valid");
                self.drop_session();
                None
            }
            Err(err) => {
                log::warn!("auth: profile refresh failed: {err}");
                self.snapshot().user
            }
        }
    }

    fn begin(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.state.set(AuthState::unknown());
    }

    fn open_session(&self, resp: AuthResponse) -> User {
        let AuthResponse { token, user } = resp;
        self.store.save(&token);
        self.set_held_token(Some(token));
        log::info!("auth: signed in as user {}", user.id);
        self.state.set(AuthState::authenticated(user.clone()));
        user
    }

    fn drop_session(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.store.clear();
        self.set_held_token(None);
        self.state.set(AuthState::anonymous());
    }

    fn held_token(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_held_token(&self, token: Option<String>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = token;
    }
}
