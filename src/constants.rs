/// Storage key for the short-lived access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the longer-lived refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key for the user identifier
pub const USER_ID_KEY: &str = "user_id";
/// Storage key for the display username
pub const USERNAME_KEY: &str = "username";

/// Default path of the token refresh endpoint, relative to the API base URL
pub const DEFAULT_REFRESH_PATH: &str = "/auth/refresh";
/// Default path of the logout endpoint, relative to the API base URL
pub const DEFAULT_LOGOUT_PATH: &str = "/auth/logout";
/// Default login entry point callers should navigate to after session loss
pub const DEFAULT_LOGIN_PATH: &str = "/login";
/// Default delay in milliseconds between the logout notice and the redirect
pub const DEFAULT_LOGOUT_REDIRECT_DELAY_MS: u64 = 1500;
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
/// Length of generated request correlation ids
pub const REQUEST_ID_LENGTH: usize = 24;

/// User agent string used in HTTP requests to identify this client to the portal API
pub const USER_AGENT: &str = "portal-client/0.1.0";

/// Notice shown when the server confirmed the logout
pub const LOGOUT_SUCCESS_NOTICE: &str = "logged out";
/// Notice shown when the logout request got no response at all
pub const LOGOUT_NO_RESPONSE_NOTICE: &str = "no response from server";
/// Notice shown when the logout request could not even be built
pub const LOGOUT_FALLBACK_NOTICE: &str = "logout failed";
