use serde::{Deserialize, Serialize};

/// Response from the token refresh endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Newly issued access token
    #[serde(rename = "accessToken")]
    pub access_token: String,
    /// Rotated refresh token, when the server issues one
    #[serde(rename = "refreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Generic message envelope used by error and confirmation bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Human-readable message from the server
    pub message: String,
}
