use serde::{Deserialize, Serialize};

/// Request body for the token refresh endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The refresh token currently held in the session store
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Request body for the logout endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// Identifier of the user whose session is being ended
    #[serde(rename = "userId")]
    pub user_id: String,
}
