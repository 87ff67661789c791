//! Provider client errors.

use thiserror::Error;

/// Errors raised while talking to the provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network failure or a failure reading the body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx HTTP status.
    #[error("provider responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The caller's deadline passed before a response arrived.
    #[error("deadline elapsed before the provider responded")]
    DeadlineExceeded,

    /// The provider answered with an error envelope.
    #[error("provider rejected the request ({rc}): {message}")]
    Rejected { rc: String, message: String },

    /// The response body could not be decoded.
    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}
