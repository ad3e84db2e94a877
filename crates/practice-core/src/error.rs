//! Error types for the practice journal

use std::{error::Error as StdError, fmt};

/// Main error type for the practice journal
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// The backend could not be reached
    Network(String),

    /// The backend answered with a non-success status
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Error message
        message: String,
    },

    /// A response body could not be decoded
    Decode(String),

    /// Not found error
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error means the requested record does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Api { status: 404, .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Network(msg) => write!(f, "Network error: {msg}"),
            Self::Api { status, message } => write!(f, "API returned error {status}: {message}"),
            Self::Decode(msg) => write!(f, "Failed to parse response: {msg}"),
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
        }
    }
}

impl StdError for Error {}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}
