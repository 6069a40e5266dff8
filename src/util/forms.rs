//! Client-side form gates for login and registration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthManager` does not re-validate credentials, and the identity service
//! may not either, so these checks are the required gate in front of it. A
//! rejected form never reaches the network.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::identity::{AuthError, IdentityClient};
use crate::net::types::{RegisterRequest, User};
use crate::state::auth::AuthManager;
use crate::state::session::SessionStore;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Loose shape check: `local@domain.tld`, no whitespace.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn check_email(email: &str) -> Result<(), AuthError> {
    if email.is_empty() {
        return Err(AuthError::invalid_field("email", "Please input your email!"));
    }
    if !looks_like_email(email) {
        return Err(AuthError::invalid_field("email", "Please enter a valid email!"));
    }
    Ok(())
}

/// Trim and check login input. Returns `(email, password)`.
///
/// # Errors
///
/// Returns `AuthError::Validation` naming the first offending field.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), AuthError> {
    let email = email.trim();
    check_email(email)?;
    if password.is_empty() {
        return Err(AuthError::invalid_field("password", "Please input your password!"));
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trim and check registration input. `accepted_terms` is the Terms of
/// Service checkbox; it never goes on the wire.
///
/// # Errors
///
/// Returns `AuthError::Validation` naming the first offending field.
pub fn validate_registration(request: RegisterRequest, accepted_terms: bool) -> Result<RegisterRequest, AuthError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AuthError::invalid_field("name", "Please input your full name!"));
    }
    let email = request.email.trim();
    check_email(email)?;
    if request.password.is_empty() {
        return Err(AuthError::invalid_field("password", "Please input your password!"));
    }
    if request.confirm_password.is_empty() {
        return Err(AuthError::invalid_field("confirm_password", "Please confirm your password!"));
    }
    if request.password != request.confirm_password {
        return Err(AuthError::invalid_field("confirm_password", "Passwords do not match"));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::invalid_field(
            "password",
            "Password must be at least 8 characters long",
        ));
    }
    if !accepted_terms {
        return Err(AuthError::invalid_field("terms", "You must agree to the terms"));
    }
    Ok(RegisterRequest { name: name.to_owned(), email: email.to_owned(), ..request })
}

/// Validate, then sign in.
///
/// # Errors
///
/// Returns the local validation error or the manager's error unchanged.
pub async fn submit_login<C, S>(auth: &AuthManager<C, S>, email: &str, password: &str) -> Result<User, AuthError>
where
    C: IdentityClient,
    S: SessionStore,
{
    let (email, password) = validate_login(email, password)?;
    auth.login(&email, &password).await
}

/// Validate, then register.
///
/// # Errors
///
/// Returns the local validation error or the manager's error unchanged.
pub async fn submit_registration<C, S>(
    auth: &AuthManager<C, S>,
    request: RegisterRequest,
    accepted_terms: bool,
) -> Result<User, AuthError>
where
    C: IdentityClient,
    S: SessionStore,
{
    let request = validate_registration(request, accepted_terms)?;
    auth.register(&request).await
}
