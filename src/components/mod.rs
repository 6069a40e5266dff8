//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared auth state from Leptos context; none of them mutate
//! it directly.

pub mod loading_screen;
pub mod route_guard;
