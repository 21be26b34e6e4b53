//! Error types for the Spotify Web API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Spotify Web API.
///
/// Nothing is retried or recovered: every variant surfaces directly to the
/// caller of the failing operation.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// HTTP transport error (connection refused, DNS failure, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The token endpoint rejected the client credentials, or answered
    /// without an `access_token` field.
    ///
    /// Common messages:
    /// - `invalid_client` — unknown client id or wrong secret
    /// - `unsupported_grant_type` — malformed token request
    #[error("authentication failed (HTTP {status}): {message}")]
    Auth {
        /// HTTP status of the token response.
        status: u16,
        /// `error_description` / `error` from the token response, or the raw body.
        message: String,
    },

    /// A resource endpoint answered with a non-2xx status.
    ///
    /// Spotify wraps these as `{"error": {"status": 404, "message": "..."}}`.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status of the response.
        status: u16,
        /// `error.message` from the response body, or the raw body.
        message: String,
    },

    /// Response body is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoded JSON lacks a field (or has it with the wrong type) while
    /// mapping into a data object.
    #[error("unexpected response shape: `{field}` is missing or not {expected}")]
    Shape {
        /// Name of the offending field.
        field: String,
        /// What the field should have been (e.g. "a string").
        expected: &'static str,
    },

    /// The requested response format is not supported.
    #[error("unsupported response format: {0:?}")]
    UnsupportedFormat(String),

    /// No client credentials were found in the environment or config file.
    #[error("no client credentials configured")]
    NotConfigured,

    /// File I/O error (credentials read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for other errors (e.g. missing config directory).
    #[error("{0}")]
    Other(String),
}

impl SpotifyError {
    pub(crate) fn shape(field: &str, expected: &'static str) -> Self {
        Self::Shape {
            field: field.to_owned(),
            expected,
        }
    }
}

/// Convenience alias for `Result<T, SpotifyError>`.
pub type Result<T> = std::result::Result<T, SpotifyError>;
