use portal_client::config::Config;
use portal_client::constants::{
    DEFAULT_LOGIN_PATH, DEFAULT_LOGOUT_PATH, DEFAULT_LOGOUT_REDIRECT_DELAY_MS,
    DEFAULT_REFRESH_PATH, DEFAULT_REST_TIMEOUT,
};

#[test]
fn config_new_falls_back_to_defaults() {
    let config = Config::new();

    assert!(!config.rest_api.base_url.is_empty());
    assert_eq!(config.rest_api.timeout, DEFAULT_REST_TIMEOUT);
    assert_eq!(config.auth.refresh_path, DEFAULT_REFRESH_PATH);
    assert_eq!(config.auth.logout_path, DEFAULT_LOGOUT_PATH);
    assert_eq!(config.auth.login_path, DEFAULT_LOGIN_PATH);
    assert_eq!(
        config.auth.logout_redirect_delay_ms,
        DEFAULT_LOGOUT_REDIRECT_DELAY_MS
    );
}

#[test]
fn config_default_matches_new() {
    let from_new = Config::new();
    let from_default = Config::default();

    assert_eq!(from_new.rest_api.base_url, from_default.rest_api.base_url);
    assert_eq!(from_new.auth.refresh_path, from_default.auth.refresh_path);
    assert_eq!(from_new.auth.logout_path, from_default.auth.logout_path);
    assert_eq!(from_new.auth.login_path, from_default.auth.login_path);
}

#[test]
fn version_is_exposed() {
    assert_eq!(portal_client::version(), portal_client::VERSION);
    assert!(!portal_client::VERSION.is_empty());
}
