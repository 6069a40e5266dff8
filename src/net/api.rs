//! REST implementation of `IdentityClient`.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call fails with `AuthError::Network`
//! since the endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses are classified per operation by the pure `*_failure`
//! helpers, so status mapping is testable without a browser.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::identity::{AuthError, IdentityClient};
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;
use super::types::{AuthResponse, RegisterRequest, User};
use crate::config::ClientConfig;

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
fn parse_error_body(raw: &str) -> Option<ErrorBody> {
    serde_json::from_str(raw).ok()
}

#[cfg(any(test, feature = "csr"))]
fn is_client_error(status: u16) -> bool {
    (400..500).contains(&status)
}

/// Any 4xx on login is a credential rejection.
#[cfg(any(test, feature = "csr"))]
fn login_failure(status: u16, body: Option<ErrorBody>) -> AuthError {
    if is_client_error(status) {
        AuthError::InvalidCredentials { detail: body.and_then(|b| b.message) }
    } else {
        AuthError::Network(format!("login failed: {status}"))
    }
}

#[cfg(any(test, feature = "csr"))]
fn register_failure(status: u16, body: Option<ErrorBody>) -> AuthError {
    if !is_client_error(status) {
        return AuthError::Network(format!("register failed: {status}"));
    }
    let body = body.unwrap_or_default();
    AuthError::Validation {
        message: body
            .message
            .unwrap_or_else(|| "Registration failed. Please check the form.".to_owned()),
        fields: body.errors,
    }
}

#[cfg(any(test, feature = "csr"))]
fn fetch_user_failure(status: u16) -> AuthError {
    match status {
        401 | 403 => AuthError::Unauthorized,
        _ => AuthError::Network(format!("fetch user failed: {status}")),
    }
}

#[cfg(any(test, feature = "csr"))]
fn logout_failure(status: u16) -> AuthError {
    AuthError::Network(format!("logout failed: {status}"))
}

#[cfg(feature = "csr")]
fn network(err: gloo_net::Error) -> AuthError {
    AuthError::Network(err.to_string())
}

#[cfg(feature = "csr")]
async fn read_error_body(resp: &gloo_net::http::Response) -> Option<ErrorBody> {
    let raw = resp.text().await.ok()?;
    parse_error_body(&raw)
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> AuthError {
    AuthError::Network("not available outside the browser".to_owned())
}

/// Identity service client speaking JSON over HTTP.
#[derive(Clone, Debug)]
pub struct HttpIdentityClient {
    config: ClientConfig,
}

impl HttpIdentityClient {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self { config: config.clone() }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[async_trait(?Send)]
impl IdentityClient for HttpIdentityClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            let payload = super::types::LoginRequest { email: email.to_owned(), password: password.to_owned() };
            let resp = gloo_net::http::Request::post(&self.url("login"))
                .header("Accept", "application/json")
                .json(&payload)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(login_failure(resp.status(), read_error_body(&resp).await));
            }
            resp.json::<AuthResponse>().await.map_err(network)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url("login"), email, password);
            Err(unavailable())
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url("register"))
                .header("Accept", "application/json")
                .json(request)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(register_failure(resp.status(), read_error_body(&resp).await));
            }
            resp.json::<AuthResponse>().await.map_err(network)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url("register"), request);
            Err(unavailable())
        }
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url("logout"))
                .header("Accept", "application/json")
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(logout_failure(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url("logout"), token);
            Err(unavailable())
        }
    }

    async fn fetch_current_user(&self, token: &str) -> Result<User, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url("user"))
                .header("Accept", "application/json")
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(fetch_user_failure(resp.status()));
            }
            resp.json::<User>().await.map_err(network)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url("user"), token);
            Err(unavailable())
        }
    }
}
