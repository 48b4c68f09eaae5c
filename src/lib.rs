//! # Portal Client
//!
//! This crate provides an authenticated HTTP client for the portal REST API.
//! It handles the session plumbing that every caller would otherwise have to
//! duplicate:
//! - Bearer token attachment on every outgoing request
//! - Transparent token refresh and single retry when the access token expires
//! - Session termination with guaranteed local credential cleanup
//!
//! # Example
//! ```ignore
//! use portal_client::prelude::*;
//!
//! let client = PortalClient::new(Config::new())?;
//! client.session().start_session(SessionCredentials::new(
//!     "access".to_string(),
//!     "refresh".to_string(),
//!     "u1".to_string(),
//!     "alice".to_string(),
//! )).await;
//!
//! // Token refresh and retry are handled automatically
//! let orders: OrdersResponse = client.get("/orders").await?;
//! ```

/// Authenticated request client with automatic token refresh
pub mod client;
/// Application configuration module
pub mod config;
/// Fixed storage keys, endpoint paths, and client defaults
pub mod constants;
/// Error types for the library
pub mod error;
/// Request and response models
pub mod model;
/// Convenient re-exports of the most commonly used types
pub mod prelude;
/// Session credential storage and session termination
pub mod session;
/// Small utilities: environment config, ids, logging
pub mod utils;

/// Library version, taken from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
