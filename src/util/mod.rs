//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing policy, form checks, and browser formatting
//! out of page components so they stay testable without a DOM.

pub mod auth;
pub mod dates;
pub mod forms;
