//! Standardized API response envelopes.
//!
//! Every response the server produces is one of these two shapes, both
//! tagged with a `success` flag.

use serde::{Deserialize, Serialize};

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: Some(message.into()),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Wrap a collection, reporting its length as `count`.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            message: None,
        }
    }
}

/// Error envelope.
///
/// `error` is a short summary, `details` carries the store's own message and
/// `message` the underlying failure text (only outside production).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,

    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Routes the server knows about, set on 404 fallbacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_routes: Option<Vec<String>>,

    /// Request ID for debugging purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// When the error response was generated (RFC 3339).
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
            message: None,
            available_routes: None,
            request_id: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    // Common error constructors
    pub fn route_not_found<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut error = Self::new("Route not found")
            .with_message("The requested endpoint does not exist");
        error.available_routes = Some(routes.into_iter().map(Into::into).collect());
        error
    }

    pub fn database_error(details: impl Into<String>) -> Self {
        Self::new("Database error").with_details(details)
    }

    pub fn unauthorized() -> Self {
        Self::new("Unauthorized")
    }

    pub fn service_unavailable() -> Self {
        Self::new("Service Unavailable")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal Server Error")
    }
}
