use crate::constants::{
    DEFAULT_LOGIN_PATH, DEFAULT_LOGOUT_PATH, DEFAULT_LOGOUT_REDIRECT_DELAY_MS,
    DEFAULT_REFRESH_PATH, DEFAULT_REST_TIMEOUT,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the portal API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Authentication endpoint and navigation configuration
    pub auth: AuthConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the portal REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for authentication endpoints and post-logout navigation
pub struct AuthConfig {
    /// Path of the token refresh endpoint, relative to the base URL
    pub refresh_path: String,
    /// Path of the logout endpoint, relative to the base URL
    pub logout_path: String,
    /// Login entry point callers navigate to after session loss
    pub login_path: String,
    /// Delay in milliseconds between the logout notice and the redirect
    pub logout_redirect_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Loads `.env` first if present. Every field falls back to a sensible
    /// default when the corresponding `PORTAL_*` variable is missing.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "PORTAL_REST_BASE_URL",
                    String::from("http://localhost:8080/api"),
                ),
                timeout: get_env_or_default("PORTAL_REST_TIMEOUT", DEFAULT_REST_TIMEOUT),
            },
            auth: AuthConfig {
                refresh_path: get_env_or_default(
                    "PORTAL_AUTH_REFRESH_PATH",
                    String::from(DEFAULT_REFRESH_PATH),
                ),
                logout_path: get_env_or_default(
                    "PORTAL_AUTH_LOGOUT_PATH",
                    String::from(DEFAULT_LOGOUT_PATH),
                ),
                login_path: get_env_or_default(
                    "PORTAL_LOGIN_PATH",
                    String::from(DEFAULT_LOGIN_PATH),
                ),
                logout_redirect_delay_ms: get_env_or_default(
                    "PORTAL_LOGOUT_REDIRECT_DELAY_MS",
                    DEFAULT_LOGOUT_REDIRECT_DELAY_MS,
                ),
            },
        }
    }
}
