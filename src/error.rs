//! Crate-level error types.
//!
//! [`PerpwatchError`] unifies every error source (configuration, HTTP,
//! JSON, numeric parsing) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PerpwatchError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum PerpwatchError {
    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request failed or the feed answered with a non-2xx status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not have the expected two-element shape.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// A decimal string from the feed could not be parsed.
    #[error("format error: {0}")]
    Format(String),
}
