//! Session token persistence across page reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only `AuthManager` writes through this boundary. Storage failures are
//! logged and swallowed: a token that cannot be persisted just means the
//! next reload starts anonymous.
//!
//! TRADE-OFFS
//! ==========
//! `LocalStorageSessionStore` is browser-only; native builds get a no-op
//! store so server-side and test code paths stay deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Durable key-value slot for the current session token.
pub trait SessionStore {
    /// Store `token`, replacing any prior value.
    fn save(&self, token: &str);
    /// Current token, if any. No side effects.
    fn read(&self) -> Option<String>;
    /// Remove any stored token. Idempotent.
    fn clear(&self);
}

/// Session store backed by `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorageSessionStore {
    key: String,
}

impl LocalStorageSessionStore {
    #[must_use]
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageSessionStore {
    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session will not survive reload");
                return;
            };
            if storage.set_item(&self.key, token).is_err() {
                log::warn!("failed to persist session token under {}", self.key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn read(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(&self.key)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(&self.key).is_err() {
                    log::warn!("failed to remove session token under {}", self.key);
                }
            }
        }
    }
}
