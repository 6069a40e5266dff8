//! Identity service contract and its error taxonomy.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthManager` talks to the remote identity service only through
//! `IdentityClient`, so the HTTP implementation in `api` and the in-memory
//! fakes used by tests are interchangeable.
//!
//! ERROR HANDLING
//! ==============
//! Failures are structured (`AuthErrorKind`) so pages branch on the kind and
//! only render the `Display` text.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::types::{AuthResponse, RegisterRequest, User};

/// Coarse failure category callers branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorKind {
    InvalidCredentials,
    Validation,
    Unauthorized,
    Network,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The service rejected the email/password pair.
    #[error("{}", .detail.as_deref().unwrap_or("Invalid email or password."))]
    InvalidCredentials { detail: Option<String> },
    /// The payload failed validation, either locally or at the service.
    #[error("{message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },
    /// The session token is missing, invalid, or expired.
    #[error("session expired or invalid")]
    Unauthorized,
    /// The service could not be reached or answered unexpectedly.
    #[error("network error: {0}")]
    Network(String),
}

impl AuthError {
    #[must_use]
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::InvalidCredentials { .. } => AuthErrorKind::InvalidCredentials,
            Self::Validation { .. } => AuthErrorKind::Validation,
            Self::Unauthorized => AuthErrorKind::Unauthorized,
            Self::Network(_) => AuthErrorKind::Network,
        }
    }

    /// Validation error for a single field.
    pub fn invalid_field(field: &str, message: &str) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.to_owned(), vec![message.to_owned()]);
        Self::Validation { message: message.to_owned(), fields }
    }

    /// Field-level messages in field order; empty for non-validation errors.
    #[must_use]
    pub fn field_messages(&self) -> Vec<String> {
        match self {
            Self::Validation { fields, .. } => fields.values().flatten().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

/// Request/response boundary to the external identity service.
///
/// Implementations are stateless and never retry; retry policy belongs to the
/// caller. Futures are `?Send` because the browser runtime is single-threaded.
#[async_trait(?Send)]
pub trait IdentityClient {
    /// Exchange credentials for a session token and profile.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError>;

    /// Create an account and open a session for it.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError>;

    /// Best-effort server-side invalidation of `token`.
    async fn logout(&self, token: &str) -> Result<(), AuthError>;

    /// Resolve the user owning `token`.
    async fn fetch_current_user(&self, token: &str) -> Result<User, AuthError>;
}
