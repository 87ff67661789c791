//! Category Errors

use salvo::http::StatusError;
use tracing::error;

use otomax_app::domain::categories::CategoriesServiceError;

pub(crate) fn into_status_error(error: CategoriesServiceError) -> StatusError {
    match error {
        CategoriesServiceError::NotFound | CategoriesServiceError::CategoryNotFound { .. } => {
            StatusError::not_found()
        }
        CategoriesServiceError::Sql(source) => {
            error!("category storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
