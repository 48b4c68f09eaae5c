/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/

//! Outgoing request descriptor
//!
//! An `ApiRequest` is built once by the caller and never mutated afterwards.
//! Whether a dispatch is a first attempt or the single allowed retry is
//! carried separately as an [`Attempt`] value, so the retry state lives in
//! the call, not in the request.

use crate::error::AppError;
use crate::utils::id::request_id;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

/// Marks whether a dispatch is the first attempt or the single allowed retry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// First submission of a request
    First,
    /// Resubmission after a successful token refresh
    Retry,
}

impl Attempt {
    /// Returns `true` for the retry attempt
    #[must_use]
    pub fn is_retry(&self) -> bool {
        matches!(self, Attempt::Retry)
    }
}

/// Descriptor for an outgoing API request
///
/// Carries method, path, extra headers, an optional JSON body, and a
/// correlation id generated at construction time. The id is stable across a
/// refresh-and-retry cycle.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    body: Option<Value>,
    request_id: String,
}

impl ApiRequest {
    /// Creates a new descriptor for the given method and path
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API endpoint path (e.g., "/orders") or an absolute URL
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: Vec::new(),
            body: None,
            request_id: request_id(),
        }
    }

    /// Adds an extra header to the descriptor
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets a JSON body, serialized at build time
    ///
    /// # Returns
    /// * `Ok(Self)` - Descriptor with the body attached
    /// * `Err(AppError)` - If the body cannot be serialized
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// HTTP method of the request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path or absolute URL
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Extra headers added by the caller
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// JSON body, if one was attached
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Correlation id, stable across retry
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}
