/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 24/10/25
******************************************************************************/

//! # Portal Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types from the portal client library. By importing this prelude, you get
//! access to everything needed for typical request and session handling.
//!
//! ## Usage
//!
//! ```rust
//! use portal_client::prelude::*;
//!
//! let config = Config::new();
//! let store = SessionStore::in_memory();
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the portal API client
pub use crate::config::{AuthConfig, Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// REQUEST CLIENT
// ============================================================================

/// Authenticated request client with automatic token refresh
pub use crate::client::PortalClient;

/// Request descriptor and retry attempt marker
pub use crate::model::request::{ApiRequest, Attempt};

// ============================================================================
// SESSION MANAGEMENT
// ============================================================================

/// Session credential storage
pub use crate::session::store::{CredentialStore, MemoryStore, SessionCredentials, SessionStore};

/// Session termination
pub use crate::session::terminator::{LogoutOutcome, RedirectHint, SessionTerminator};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;
