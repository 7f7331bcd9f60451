//! Error types for the inventory API client.
//!
//! # Design
//! Every failure reaches the page as a single human-readable string, so the
//! `Display` of `Request` is the bare message: the server's `error` field or
//! the operation's default. Status is kept alongside for logging.

/// Errors returned by `ProductClient` parsers, transports and `ProductApi`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (connection refused, reset, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// A success body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Errors raised while resolving `ApiConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("base URL must not be empty")]
    EmptyBaseUrl,

    #[error("base URL {0:?} must start with http:// or https://")]
    UnsupportedScheme(String),
}
