//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the session lifecycle and `session` persists its token. Pages
//! only ever read this state; writes go through `AuthManager` operations.

pub mod auth;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
