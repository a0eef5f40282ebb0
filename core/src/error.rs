//! Error types for the governance API client.
//!
//! # Design
//! `NotFound` and `Unauthorized` get dedicated variants because callers act
//! on them directly (empty detail page, credential refresh). All other
//! non-2xx responses land in `HttpError` with the raw status code and body.
//! [`ErrorKind`] is the coarse classification handed to UI layers through
//! [`FetchOutcome`](crate::outcome::FetchOutcome).

use thiserror::Error;

/// Errors returned by `HttpClient` and the endpoint catalog.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned 401; the credential is missing or stale.
    #[error("unauthorized: {body}")]
    Unauthorized { body: String },

    /// The server returned a non-2xx status other than 401/404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (DNS, connect, timeout, TLS).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// Credential material could not be loaded, stored or resolved.
    #[error("credential error: {0}")]
    Credential(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl ApiError {
    /// Builds the error for a non-success status.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => ApiError::Unauthorized { body },
            404 => ApiError::NotFound,
            _ => ApiError::HttpError { status, body },
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::NotFound => ErrorKind::NotFound,
            ApiError::Unauthorized { .. } => ErrorKind::Unauthorized,
            ApiError::HttpError { status, .. } => match *status {
                403 => ErrorKind::Forbidden,
                400 | 422 => ErrorKind::Validation,
                429 => ErrorKind::RateLimited,
                s if s >= 500 => ErrorKind::Server,
                _ => ErrorKind::Client,
            },
            ApiError::Transport(_) => ErrorKind::Network,
            ApiError::DeserializationError(_) => ErrorKind::Decode,
            ApiError::SerializationError(_) | ApiError::Credential(_) | ApiError::Config(_) => {
                ErrorKind::Client
            }
        }
    }
}

/// Coarse failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Network,
    Unauthorized,
    Forbidden,
    NotFound,
    Validation,
    RateLimited,
    Server,
    Decode,
    /// Local mistakes: bad config, unserializable input, unreadable token.
    Client,
}

/// Errors raised while loading or validating [`ClientConfig`](crate::config::ClientConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("missing required configuration field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Figment(Box::new(err))
    }
}
