//! Moderation error types.
//!
//! These are internal plumbing: every failure in the remote classifier is
//! recovered locally and converted into a fail-open decision, so no public
//! moderation entry point ever returns an error.

use thiserror::Error;

/// Errors that can occur while consulting the remote classifier.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport-level failure, including timeouts and cancellations.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("remote classifier returned status {0}")]
    Status(reqwest::StatusCode),

    /// The completion payload had no message content to parse.
    #[error("remote response contained no message content")]
    MissingContent,

    /// The message content was empty after trimming.
    #[error("remote response was empty")]
    EmptyResponse,

    /// The message content did not parse as a verdict object.
    #[error("malformed verdict payload: {0}")]
    MalformedVerdict(#[from] serde_json::Error),
}

/// Result type for remote classification internals.
pub type Result<T> = std::result::Result<T, RemoteError>;
