//! # API Error Type
//!
//! Unified error type for the gateway layer.
//!
//! A 401 is its own variant: there is no ambient logout-and-redirect here.
//! The caller that made the request decides what an expired token means for
//! its own page.

use thiserror::Error;

use matjip_core::CoreError;

/// Errors from the gateway layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint rejected the credentials (HTTP 401).
    #[error("Request unauthorized (token missing or rejected)")]
    Unauthorized,

    /// The endpoint answered with a non-success status.
    #[error("Endpoint returned status {status}")]
    Status { status: u16 },

    /// The request never completed (connection refused, timeout, DNS, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A stored or received payload could not be decoded.
    #[error("Payload could not be decoded: {0}")]
    Decode(String),

    /// The endpoint (remote or fixture) rejected the request itself.
    ///
    /// Carries the user-facing message ("이미 사용 중인 아이디입니다." etc.).
    #[error("Request rejected: {message}")]
    Rejected { message: String },

    /// Domain error raised below the gateway layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    /// Creates a rejection with a user-facing message.
    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            message: message.into(),
        }
    }
}

/// Result type for gateway operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Unit Tests
// =============================================================================
