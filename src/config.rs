//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so settings are baked in from
//! `AUTHFLOW_API_BASE`, `AUTHFLOW_TOKEN_KEY`, and `AUTHFLOW_LOG` when the crate
//! is compiled. Missing values fall back to same-origin defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TOKEN_KEY: &str = "authflow_token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Identity service root, without a trailing slash.
    pub api_base: String,
    /// `localStorage` key holding the session token.
    pub token_key: String,
    /// Console log verbosity.
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}

impl ClientConfig {
    /// Load from the compile-time `AUTHFLOW_*` variables.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("AUTHFLOW_API_BASE"),
            option_env!("AUTHFLOW_TOKEN_KEY"),
            option_env!("AUTHFLOW_LOG"),
        )
    }

    fn from_parts(api_base: Option<&str>, token_key: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        let token_key = token_key
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_TOKEN_KEY)
            .to_owned();
        let log_level = log_level
            .and_then(|v| log::Level::from_str(v.trim()).ok())
            .unwrap_or(log::Level::Info);
        Self { api_base, token_key, log_level }
    }

    /// Absolute endpoint URL for `path` under `api_base`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
