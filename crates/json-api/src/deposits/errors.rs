//! Deposit Errors

use salvo::http::StatusError;
use tracing::error;

use otomax_app::{domain::deposits::DepositsServiceError, integrations::duitku::PaymentError};

pub(crate) fn into_status_error(error: DepositsServiceError) -> StatusError {
    match error {
        DepositsServiceError::InvalidData
        | DepositsServiceError::InvalidAmount(_)
        | DepositsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Invalid deposit payload")
        }
        DepositsServiceError::UnknownMethod(code) => {
            StatusError::bad_request().brief(format!("Unknown payment method {code}"))
        }
        DepositsServiceError::MethodUnavailable(code) => {
            StatusError::bad_request().brief(format!("Payment method {code} is not available"))
        }
        DepositsServiceError::AmountOutOfRange { min, max } => {
            StatusError::bad_request().brief(format!("Amount must be between {min} and {max}"))
        }
        DepositsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Deposit already exists")
        }
        DepositsServiceError::NotFound => StatusError::not_found(),
        DepositsServiceError::Payment(PaymentError::Rejected { code, message }) => {
            error!(code = %code, "payment gateway rejected deposit: {message}");

            StatusError::bad_gateway().brief(format!("Payment rejected: {message}"))
        }
        DepositsServiceError::Payment(source) => {
            error!("payment gateway unavailable: {source}");

            StatusError::bad_gateway().brief("Payment gateway unavailable")
        }
        DepositsServiceError::Method(source) => {
            error!("payment method lookup failed: {source}");

            StatusError::internal_server_error()
        }
        DepositsServiceError::Sql(source) => {
            error!("deposit storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
