/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/10/25
******************************************************************************/

//! Session credential storage
//!
//! Credentials live behind an explicit session-context object instead of any
//! ambient global state. `SessionStore` exposes the typed operations the
//! client needs; the backing storage is a string-keyed [`CredentialStore`]
//! that callers can swap for their own persistence.

use crate::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USERNAME_KEY, USER_ID_KEY};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// String-keyed, string-valued credential storage backend
///
/// Mirrors the shape of browser-style key/value session storage. All
/// operations are infallible from the caller's point of view; a backend that
/// can fail should log and degrade rather than surface errors into the
/// request path.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Reads the value stored under `key`
    async fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: String);
    /// Removes the value stored under `key`
    async fn remove(&self, key: &str);
    /// Removes every stored value
    async fn clear(&self);
}

/// In-memory credential storage, the default backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put(&self, key: &str, value: String) {
        self.entries.write().await.insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

/// Snapshot of the credentials held for the current session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCredentials {
    /// Short-lived token authorizing API requests
    pub access_token: Option<String>,
    /// Longer-lived token used to obtain a new access token
    pub refresh_token: Option<String>,
    /// Identifier of the logged-in user
    pub user_id: Option<String>,
    /// Display name of the logged-in user
    pub username: Option<String>,
}

impl SessionCredentials {
    /// Creates a fully populated credential set, as produced by a login
    pub fn new(
        access_token: String,
        refresh_token: String,
        user_id: String,
        username: String,
    ) -> Self {
        Self {
            access_token: Some(access_token),
            refresh_token: Some(refresh_token),
            user_id: Some(user_id),
            username: Some(username),
        }
    }

    /// Returns `true` when no credential is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none()
            && self.refresh_token.is_none()
            && self.user_id.is_none()
            && self.username.is_none()
    }
}

/// Typed session context over a [`CredentialStore`] backend
///
/// Cloning is cheap; clones share the same backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn CredentialStore>,
}

impl SessionStore {
    /// Creates a session store over a caller-provided backend
    pub fn new(backend: Arc<dyn CredentialStore>) -> Self {
        Self { backend }
    }

    /// Creates a session store over a fresh in-memory backend
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Current access token, if any
    pub async fn access_token(&self) -> Option<String> {
        self.backend.get(ACCESS_TOKEN_KEY).await
    }

    /// Current refresh token, if any
    pub async fn refresh_token(&self) -> Option<String> {
        self.backend.get(REFRESH_TOKEN_KEY).await
    }

    /// Identifier of the logged-in user, if any
    pub async fn user_id(&self) -> Option<String> {
        self.backend.get(USER_ID_KEY).await
    }

    /// Display name of the logged-in user, if any
    pub async fn username(&self) -> Option<String> {
        self.backend.get(USERNAME_KEY).await
    }

    /// Seeds the store with the credentials of a fresh session
    ///
    /// Fields that are `None` are removed, so stale values from a previous
    /// session cannot survive a new login.
    pub async fn start_session(&self, credentials: SessionCredentials) {
        let SessionCredentials {
            access_token,
            refresh_token,
            user_id,
            username,
        } = credentials;
        self.write_or_remove(ACCESS_TOKEN_KEY, access_token).await;
        self.write_or_remove(REFRESH_TOKEN_KEY, refresh_token).await;
        self.write_or_remove(USER_ID_KEY, user_id).await;
        self.write_or_remove(USERNAME_KEY, username).await;
    }

    /// Replaces the access token after a successful refresh
    pub async fn set_access_token(&self, token: String) {
        self.backend.put(ACCESS_TOKEN_KEY, token).await;
    }

    /// Replaces the refresh token when the server rotates it
    pub async fn set_refresh_token(&self, token: String) {
        self.backend.put(REFRESH_TOKEN_KEY, token).await;
    }

    /// Removes every credential from the store
    pub async fn clear(&self) {
        self.backend.clear().await;
    }

    /// Returns `true` when no credential is present
    pub async fn is_empty(&self) -> bool {
        self.snapshot().await.is_empty()
    }

    /// Reads all credentials at once
    pub async fn snapshot(&self) -> SessionCredentials {
        SessionCredentials {
            access_token: self.access_token().await,
            refresh_token: self.refresh_token().await,
            user_id: self.user_id().await,
            username: self.username().await,
        }
    }

    async fn write_or_remove(&self, key: &str, value: Option<String>) {
        match value {
            Some(value) => self.backend.put(key, value).await,
            None => self.backend.remove(key).await,
        }
    }
}
