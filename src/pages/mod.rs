//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and wraps its content in `RouteGuard`;
//! redirect policy is never decided inside a page.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
