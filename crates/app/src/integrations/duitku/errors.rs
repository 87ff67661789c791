//! Payment gateway errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("payment gateway responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("payment gateway rejected the transaction ({code}): {message}")]
    Rejected { code: String, message: String },

    #[error("could not decode payment gateway response: {0}")]
    Decode(#[from] serde_json::Error),
}
