//! Error types for the SmartPark client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire SmartPark client.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum SmartParkError {
    /// Scanned QR text could not be turned into a `ScanPayload`
    #[error("Invalid scan payload: {0}")]
    InvalidPayload(String),

    /// The active-session lookup failed (non-2xx status or transport error)
    #[error("Active session query failed: {0}")]
    ActiveSessionQueryFailed(String),

    /// Request could not be delivered or the response could not be read
    #[error("Transport error: {endpoint} - {message}")]
    Transport { endpoint: String, message: String },

    /// Server answered with a non-success status
    #[error("API error ({status}) at {endpoint}")]
    Api { endpoint: String, status: u16 },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SmartParkError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidPayload error
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload(message.into())
    }

    /// Creates an ActiveSessionQueryFailed error
    pub fn active_session_failed(message: impl Into<String>) -> Self {
        Self::ActiveSessionQueryFailed(message.into())
    }

    /// Creates a Transport error
    pub fn transport(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Creates an Api error
    pub fn api(endpoint: impl Into<String>, status: u16) -> Self {
        Self::Api {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidPayload error
    pub fn is_invalid_payload(&self) -> bool {
        matches!(self, Self::InvalidPayload(_))
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is an Api error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for SmartParkError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SmartParkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SmartParkError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<chrono::ParseError> for SmartParkError {
    fn from(err: chrono::ParseError) -> Self {
        Self::Serialization {
            format: "datetime".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, SmartParkError>`.
pub type Result<T> = std::result::Result<T, SmartParkError>;
