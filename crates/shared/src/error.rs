//! Application-wide error types.
//!
//! Errors follow the taxonomy of the back-office client:
//! - validation errors are raised before any network traffic,
//! - API errors carry the status and message parsed from the server body,
//! - network errors wrap transport failures with no automatic retry.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected locally before any request was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation (e.g. invalid status transition).
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// The server rejected the request with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Message parsed from the response `error`/`message` field.
        message: String,
    },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Resource not found in the local cache.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Another operation of the same kind is still in flight.
    #[error("Operation already in flight: {0}")]
    InFlight(String),

    /// Local storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the machine-readable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Api { .. } => "API_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Deserialization(_) => "DESERIALIZATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InFlight(_) => "IN_FLIGHT",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true for errors raised before any request was issued.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::BusinessRule(_) | Self::NotFound(_) | Self::InFlight(_)
        )
    }

    /// Returns the HTTP status the server answered with, if any.
    #[must_use]
    pub const fn api_status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
