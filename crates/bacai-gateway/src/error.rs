//! Error types for the BACAI gateway.
//!
//! This module defines the error hierarchy for gateway operations:
//! configuration loading and validation, and calls to the model service.

use std::path::PathBuf;

/// A specialized `Result` type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors that can occur while configuring or running the gateway.
///
/// Variants carry actionable suggestions where possible.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid JSON syntax in the configuration file, or the file is unreadable.
    #[error("Invalid JSON in config file '{path}': {message}\n\nSuggestion: Validate your bacai.json with a JSON linter")]
    ConfigParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Description of the parse error.
        message: String,
    },

    /// Configuration validation failed.
    #[error("Invalid configuration: {message}\n\nSuggestion: {suggestion}")]
    ConfigValidationError {
        /// Description of the validation failure.
        message: String,
        /// Actionable suggestion for the user.
        suggestion: String,
    },

    // ========================================================================
    // Model Service Errors
    // ========================================================================
    /// The model service call failed.
    #[error("Model service error ({kind}): {message}\n\nSuggestion: {suggestion}")]
    ModelService {
        /// The kind of failure.
        kind: ModelErrorKind,
        /// Detailed error message.
        message: String,
        /// Actionable suggestion for the operator.
        suggestion: String,
    },

    // ========================================================================
    // General I/O Errors
    // ========================================================================
    /// General I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Categories of model service failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelErrorKind {
    /// The service rejected the bearer token (401/403).
    Authentication,
    /// Rate limit exceeded (429).
    RateLimit,
    /// Server error (5xx responses) or other unexpected status.
    Server,
    /// Connection could not be established.
    Network,
    /// The call exceeded the configured timeout.
    Timeout,
    /// The response body did not have the expected shape.
    InvalidResponse,
    /// The service answered but reported `success: false`.
    Rejected,
}

impl std::fmt::Display for ModelErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authentication => write!(f, "authentication"),
            Self::RateLimit => write!(f, "rate_limit"),
            Self::Server => write!(f, "server"),
            Self::Network => write!(f, "network"),
            Self::Timeout => write!(f, "timeout"),
            Self::InvalidResponse => write!(f, "invalid_response"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

impl ModelErrorKind {
    /// Returns a suggestion message for this error kind.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::Authentication => "Check MODEL_SERVICE_TOKEN matches the model service",
            Self::RateLimit => "Wait and retry, or reduce request frequency",
            Self::Server => "Retry later; the model service may be experiencing issues",
            Self::Network => "Check MODEL_SERVICE_URL and that the model service is running",
            Self::Timeout => "Increase requestTimeoutSecs or check model service load",
            Self::InvalidResponse => "Check the model service version matches the gateway",
            Self::Rejected => "Inspect the model service logs for the rejected request",
        }
    }

    /// Maps an HTTP status returned by the model service to an error kind.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Authentication,
            429 => Self::RateLimit,
            _ => Self::Server,
        }
    }
}

impl GatewayError {
    /// Creates a new `ConfigParseError` with the given path and message.
    #[must_use]
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new `ConfigValidationError` with the given message and suggestion.
    #[must_use]
    pub fn config_validation(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self::ConfigValidationError {
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Creates a new `ModelService` error with automatic suggestion based on kind.
    #[must_use]
    pub fn model_service(kind: ModelErrorKind, message: impl Into<String>) -> Self {
        Self::ModelService {
            kind,
            message: message.into(),
            suggestion: kind.suggestion().to_string(),
        }
    }

    /// Returns the model error kind, if this is a model service error.
    #[must_use]
    pub const fn model_kind(&self) -> Option<ModelErrorKind> {
        match self {
            Self::ModelService { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` if this error is transient and the call may succeed later.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ModelService {
                kind: ModelErrorKind::RateLimit
                    | ModelErrorKind::Server
                    | ModelErrorKind::Network
                    | ModelErrorKind::Timeout,
                ..
            }
        )
    }
}
