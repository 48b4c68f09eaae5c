/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/10/25
******************************************************************************/

//! Authenticated request client for the portal API
//!
//! This module provides a clean, easy-to-use client that handles:
//! - Bearer token attachment on every outgoing request
//! - Transparent token refresh on an expired-token failure
//! - Exactly one retry of the failed request, never more
//!
//! # Example
//! ```ignore
//! use portal_client::client::PortalClient;
//! use portal_client::config::Config;
//!
//! let client = PortalClient::new(Config::new())?;
//!
//! // Make requests - token refresh is handled automatically
//! let orders: OrdersResponse = client.get("/orders").await?;
//! ```

use crate::config::Config;
use crate::constants::{REQUEST_ID_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::request::{ApiRequest, Attempt};
use crate::model::requests::RefreshRequest;
use crate::model::responses::RefreshResponse;
use crate::session::store::SessionStore;
use reqwest::{Client as HttpInternalClient, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Client for the portal API with automatic token refresh
///
/// Every request reads the current access token from the session store. A 401
/// on a first attempt triggers one refresh call against the configured
/// refresh endpoint and one resubmission of the original request; a 401 on
/// the resubmission is surfaced as [`AppError::Unauthorized`]. A failed
/// refresh wipes the session store and surfaces
/// [`AppError::SessionInvalidated`].
pub struct PortalClient {
    http: HttpInternalClient,
    config: Arc<Config>,
    session: SessionStore,
    /// Single-flight gate: concurrent expired requests share one refresh call
    refresh_gate: Mutex<()>,
}

impl PortalClient {
    /// Creates a new client with a fresh in-memory session store
    ///
    /// # Arguments
    /// * `config` - Configuration containing API settings
    ///
    /// # Returns
    /// * `Ok(PortalClient)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_store(config, SessionStore::in_memory())
    }

    /// Creates a new client over a caller-provided session store
    ///
    /// Use this to share one store between the client and a
    /// [`SessionTerminator`](crate::session::terminator::SessionTerminator),
    /// or to plug in a custom
    /// [`CredentialStore`](crate::session::store::CredentialStore) backend.
    pub fn with_store(config: Config, session: SessionStore) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http,
            config,
            session,
            refresh_gate: Mutex::new(()),
        })
    }

    /// Session store shared by this client
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Configuration used by this client
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Makes a GET request to the portal API
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g., "/orders")
    ///
    /// # Returns
    /// * `Ok(T)` - Deserialized response
    /// * `Err(AppError)` - If the request fails
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<()>).await
    }

    /// Makes a POST request to the portal API
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `body` - Request body to serialize as JSON
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request to the portal API
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    /// * `body` - Request body to serialize as JSON
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: B,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a DELETE request to the portal API
    ///
    /// # Arguments
    /// * `path` - API endpoint path
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<()>).await
    }

    /// Builds a descriptor, sends it, and deserializes the JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API endpoint path
    /// * `body` - Optional request body
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, AppError> {
        let mut descriptor = ApiRequest::new(method, path);
        if let Some(body) = body {
            descriptor = descriptor.with_json(&body)?;
        }

        let response = self.send(&descriptor).await?;
        self.parse_response(response).await
    }

    /// Sends a request descriptor, transparently recovering from one expired token
    ///
    /// # Returns
    /// * `Ok(Response)` - Successful response, possibly after a refresh-and-retry
    /// * `Err(AppError)` - Unrecoverable failure
    pub async fn send(&self, request: &ApiRequest) -> Result<Response, AppError> {
        if request.path().is_empty() {
            return Err(AppError::InvalidInput(
                "request path must not be empty".to_string(),
            ));
        }

        match self.dispatch(request, Attempt::First).await {
            Ok(response) => Ok(response),
            Err(AppError::AccessTokenExpired) => {
                warn!("Access token rejected, refreshing and retrying");
                self.refresh_access_token().await?;

                self.dispatch(request, Attempt::Retry).await
            }
            Err(e) => Err(e),
        }
    }

    /// Internal method to make HTTP requests
    async fn dispatch(&self, request: &ApiRequest, attempt: Attempt) -> Result<Response, AppError> {
        let url = self.build_url(request.path());

        debug!("{} {} [{}]", request.method(), url, request.request_id());

        let mut req = self
            .http
            .request(request.method().clone(), &url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .header("Accept", "application/json; charset=UTF-8")
            .header(REQUEST_ID_HEADER, request.request_id());

        if let Some(token) = self.session.access_token().await {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        for (name, value) in request.headers() {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body() {
            req = req.json(body);
        }

        let response = req.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            let body_text = response.text().await.unwrap_or_default();
            if attempt.is_retry() {
                error!("Unauthorized after retry: {}", body_text);
                return Err(AppError::Unauthorized);
            }
            return Err(AppError::AccessTokenExpired);
        }

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body_text);
            return Err(AppError::Unexpected(status));
        }

        Ok(response)
    }

    /// Exchanges the stored refresh token for a new access token
    ///
    /// Guarded by a single-flight gate: when several requests fail with an
    /// expired token at once, one of them performs the refresh call and the
    /// others reuse its result. Any refresh failure wipes the session store.
    async fn refresh_access_token(&self) -> Result<String, AppError> {
        let stale = self.session.access_token().await;
        let _guard = self.refresh_gate.lock().await;

        // A request that waited on the gate finds the refreshed token already stored
        if let Some(current) = self.session.access_token().await {
            if stale.as_deref() != Some(current.as_str()) {
                debug!("Access token already refreshed by a concurrent request");
                return Ok(current);
            }
        }

        let Some(refresh_token) = self.session.refresh_token().await else {
            warn!("No refresh token in session, invalidating");
            self.session.clear().await;
            return Err(AppError::SessionInvalidated);
        };

        info!("Refreshing access token");

        let url = self.build_url(&self.config.auth.refresh_path);

        let outcome = self
            .http
            .post(&url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .header("Accept", "application/json; charset=UTF-8")
            .json(&RefreshRequest { refresh_token })
            .send()
            .await;

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                warn!("Refresh request failed: {}", e);
                self.session.clear().await;
                return Err(AppError::SessionInvalidated);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!("Token refresh rejected with status {}: {}", status, body_text);
            self.session.clear().await;
            return Err(AppError::SessionInvalidated);
        }

        let token: RefreshResponse = match response.json().await {
            Ok(token) => token,
            Err(e) => {
                warn!("Unreadable refresh response: {}", e);
                self.session.clear().await;
                return Err(AppError::SessionInvalidated);
            }
        };

        self.session.set_access_token(token.access_token.clone()).await;
        if let Some(rotated) = token.refresh_token {
            self.session.set_refresh_token(rotated).await;
        }

        info!("✓ Access token refreshed");
        Ok(token.access_token)
    }

    /// Parses a response into the desired type
    async fn parse_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, AppError> {
        Ok(response.json().await?)
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
