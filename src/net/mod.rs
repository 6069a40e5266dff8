//! Networking modules for the identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` defines the client contract and error taxonomy, `api` implements
//! it over HTTP, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
