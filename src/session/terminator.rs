//! Session termination
//!
//! Ends a session both server-side and client-side. The local cleanup is the
//! hard contract: the session store is emptied on every path, whether the
//! server confirms, rejects, or never answers. The outcome only changes the
//! notice shown to the user and never blocks the redirect.

use crate::config::Config;
use crate::constants::{
    LOGOUT_FALLBACK_NOTICE, LOGOUT_NO_RESPONSE_NOTICE, LOGOUT_SUCCESS_NOTICE, USER_AGENT,
};
use crate::error::AppError;
use crate::model::requests::LogoutRequest;
use crate::model::responses::ApiMessage;
use crate::session::store::SessionStore;
use reqwest::Client as HttpInternalClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Navigation hint returned with every logout outcome
///
/// The client performs no navigation itself; callers sleep for `delay` after
/// showing the notice, then route to `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectHint {
    /// Login entry point to navigate to
    pub path: String,
    /// Short delay between the notice and the navigation
    pub delay: Duration,
}

/// Result of a logout attempt
///
/// By the time an outcome exists, local credentials are already gone.
#[derive(Debug, Clone)]
pub struct LogoutOutcome {
    /// Whether the server confirmed the logout
    pub acknowledged: bool,
    /// User-facing notice describing the result
    pub notice: String,
    /// Where and when the caller should navigate next
    pub redirect: RedirectHint,
}

/// Ends sessions against the portal logout endpoint
pub struct SessionTerminator {
    http: HttpInternalClient,
    config: Arc<Config>,
    session: SessionStore,
}

impl SessionTerminator {
    /// Creates a new terminator sharing the given session store
    ///
    /// # Arguments
    /// * `config` - Configuration with the logout endpoint and login path
    /// * `session` - Store holding the credentials to wipe
    ///
    /// # Returns
    /// * `Ok(SessionTerminator)` - Ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Arc<Config>, session: SessionStore) -> Result<Self, AppError> {
        let http = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http,
            config,
            session,
        })
    }

    /// Sends a logout notification and clears the local session
    ///
    /// The store is cleared before the server's answer is inspected, so no
    /// code path can leave the client locally "logged in". The notice is the
    /// server-provided message when one exists, a fixed "no response" text
    /// when the request never got an answer, or a generic fallback.
    ///
    /// # Arguments
    /// * `user_id` - Identifier of the user logging out
    pub async fn logout(&self, user_id: &str) -> LogoutOutcome {
        info!("Logging out user {}", user_id);

        let url = self.build_url(&self.config.auth.logout_path);
        debug!("POST {}", url);

        let mut request = self.http.post(&url).json(&LogoutRequest {
            user_id: user_id.to_string(),
        });
        if let Some(token) = self.session.access_token().await {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let result = request.send().await;

        // Security takes precedence over server acknowledgment
        self.session.clear().await;

        match result {
            Ok(response) if response.status().is_success() => {
                info!("✓ Logout confirmed for user {}", user_id);
                self.outcome(true, LOGOUT_SUCCESS_NOTICE.to_string())
            }
            Ok(response) => {
                let status = response.status();
                let notice = match response.json::<ApiMessage>().await {
                    Ok(body) => body.message,
                    Err(_) => format!("logout rejected with status {status}"),
                };
                warn!("Logout rejected with status {}: {}", status, notice);
                self.outcome(false, notice)
            }
            Err(e) if e.is_builder() => {
                warn!("Logout request could not be built: {}", e);
                self.outcome(false, LOGOUT_FALLBACK_NOTICE.to_string())
            }
            Err(e) => {
                warn!("No response from logout endpoint: {}", e);
                self.outcome(false, LOGOUT_NO_RESPONSE_NOTICE.to_string())
            }
        }
    }

    /// Navigation hint built from the configured login path and delay
    pub fn redirect_hint(&self) -> RedirectHint {
        RedirectHint {
            path: self.config.auth.login_path.clone(),
            delay: Duration::from_millis(self.config.auth.logout_redirect_delay_ms),
        }
    }

    fn outcome(&self, acknowledged: bool, notice: String) -> LogoutOutcome {
        LogoutOutcome {
            acknowledged,
            notice,
            redirect: self.redirect_hint(),
        }
    }

    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.rest_api.base_url, path)
        }
    }
}
