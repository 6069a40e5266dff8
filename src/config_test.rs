use super::*;

#[test]
fn defaults_when_nothing_set() {
    let config = ClientConfig::from_parts(None, None, None);
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.token_key, "authflow_token");
    assert_eq!(config.log_level, log::Level::Info);
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn api_base_trailing_slashes_are_trimmed() {
    let config = ClientConfig::from_parts(Some("https://id.example.com/api//"), None, None);
    assert_eq!(config.api_base, "https://id.example.com/api");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ClientConfig::from_parts(Some("   "), Some(""), Some(" "));
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.token_key, DEFAULT_TOKEN_KEY);
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = ClientConfig::from_parts(None, None, Some("DEBUG"));
    assert_eq!(config.log_level, log::Level::Debug);
    let config = ClientConfig::from_parts(None, None, Some("warn"));
    assert_eq!(config.log_level, log::Level::Warn);
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let config = ClientConfig::from_parts(None, None, Some("chatty"));
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let config = ClientConfig::from_parts(Some("https://id.example.com/api/"), None, None);
    assert_eq!(config.endpoint("login"), "https://id.example.com/api/login");
    assert_eq!(config.endpoint("/user"), "https://id.example.com/api/user");
}
