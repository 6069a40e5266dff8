//! Scripted `IdentityClient` and in-memory `SessionStore` for tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::net::identity::{AuthError, IdentityClient};
use crate::net::types::{AuthResponse, RegisterRequest, User};
use crate::state::session::SessionStore;

pub(crate) fn ada() -> User {
    User {
        id: "1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        created_at: "2020-01-01".to_owned(),
    }
}

pub(crate) fn session_for(token: &str, user: User) -> AuthResponse {
    AuthResponse { token: token.to_owned(), user }
}

fn unscripted() -> AuthError {
    AuthError::Network("unscripted call".to_owned())
}

struct Script {
    login: Result<AuthResponse, AuthError>,
    register: Result<AuthResponse, AuthError>,
    logout: Result<(), AuthError>,
    fetch: Result<User, AuthError>,
    calls: Vec<String>,
    probe: Option<Box<dyn Fn()>>,
    gates: BTreeMap<&'static str, Rc<Notify>>,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            login: Err(unscripted()),
            register: Err(unscripted()),
            logout: Ok(()),
            fetch: Err(unscripted()),
            calls: Vec::new(),
            probe: None,
            gates: BTreeMap::new(),
        }
    }
}

/// Identity client returning scripted results and recording every call.
#[derive(Clone, Default)]
pub(crate) struct FakeIdentity {
    script: Rc<RefCell<Script>>,
}

impl FakeIdentity {
    pub(crate) fn on_login(self, result: Result<AuthResponse, AuthError>) -> Self {
        self.script.borrow_mut().login = result;
        self
    }

    pub(crate) fn on_register(self, result: Result<AuthResponse, AuthError>) -> Self {
        self.script.borrow_mut().register = result;
        self
    }

    pub(crate) fn on_logout(self, result: Result<(), AuthError>) -> Self {
        self.script.borrow_mut().logout = result;
        self
    }

    pub(crate) fn on_fetch(&self, result: Result<User, AuthError>) {
        self.script.borrow_mut().fetch = result;
    }

    /// Run `probe` inside every call, while the caller is suspended.
    pub(crate) fn set_probe(&self, probe: impl Fn() + 'static) {
        self.script.borrow_mut().probe = Some(Box::new(probe));
    }

    /// Suspend every `op` call ("logout" or "fetch") until the returned gate
    /// is notified once per call.
    pub(crate) fn hold(&self, op: &'static str) -> Rc<Notify> {
        let gate = Rc::new(Notify::new());
        self.script.borrow_mut().gates.insert(op, Rc::clone(&gate));
        gate
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.script.borrow().calls.clone()
    }

    fn record(&self, call: String) {
        self.script.borrow_mut().calls.push(call);
        let script = self.script.borrow();
        if let Some(probe) = script.probe.as_ref() {
            probe();
        }
    }

    async fn pass_gate(&self, op: &'static str) {
        let gate = self.script.borrow().gates.get(op).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait(?Send)]
impl IdentityClient for FakeIdentity {
    async fn login(&self, email: &str, _password: &str) -> Result<AuthResponse, AuthError> {
        self.record(format!("login:{email}"));
        self.script.borrow().login.clone()
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        self.record(format!("register:{}", request.email));
        self.script.borrow().register.clone()
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        self.record(format!("logout:{token}"));
        self.pass_gate("logout").await;
        self.script.borrow().logout.clone()
    }

    async fn fetch_current_user(&self, token: &str) -> Result<User, AuthError> {
        self.record(format!("fetch:{token}"));
        self.pass_gate("fetch").await;
        self.script.borrow().fetch.clone()
    }
}

/// Shared in-memory token slot.
#[derive(Clone, Default)]
pub(crate) struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub(crate) fn holding(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
