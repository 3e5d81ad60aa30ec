// ── API error types ──
//
// One flat error enum for the whole crate. The backend reports failures
// both ways at once: a non-2xx HTTP status AND an envelope with a non-200
// `code`, so both paths converge on `Error::Api`.

use thiserror::Error;

/// Errors produced by [`crate::ApiClient`] calls.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection, DNS, TLS, or timeout failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an error envelope.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Envelope `code` field (mirrors the HTTP status in practice).
        code: i32,
        /// Envelope `message` field.
        message: String,
    },

    /// HTTP 404 on a keyed lookup (get / update / delete).
    #[error("{resource} not found: {id}")]
    NotFound {
        resource: &'static str,
        id: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode response: {message}")]
    Deserialization { message: String },

    /// The configured base URL could not be parsed or joined.
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}
