//! Payment Method Errors

use salvo::http::StatusError;
use tracing::error;

use otomax_app::domain::methods::MethodsServiceError;

pub(crate) fn into_status_error(error: MethodsServiceError) -> StatusError {
    match error {
        MethodsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Payment method code already used")
        }
        MethodsServiceError::MissingRequiredData | MethodsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid payment method payload")
        }
        MethodsServiceError::NotFound => StatusError::not_found(),
        MethodsServiceError::Sql(source) => {
            error!("payment method storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
