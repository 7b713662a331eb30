use thiserror::Error;

/// A single field-level validation failure reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Failures surfaced by a resource gateway.
///
/// This is the closed set of outcomes a store has to reconcile; every
/// transport or HTTP failure is classified into one of these variants at the
/// gateway boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },

    #[error("validation failed: {}", message.as_deref().unwrap_or("invalid request"))]
    Validation {
        message: Option<String>,
        errors: Vec<FieldError>,
    },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-provided message, if the failure carried one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } | ApiError::Validation { message, .. } => {
                message.as_deref().filter(|m| !m.is_empty())
            }
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// HTTP status code, when the failure came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Validation { .. } => Some(400),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// The message a store records for this failure.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.message().unwrap_or(fallback).to_string()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Http {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Durable key-value storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// A store operation failed; `message` is what the store recorded.
    #[error("{message}")]
    Operation {
        message: String,
        #[source]
        source: ApiError,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
