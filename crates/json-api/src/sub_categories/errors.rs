//! Sub-category Errors

use salvo::http::StatusError;
use tracing::error;

use otomax_app::domain::sub_categories::SubCategoriesServiceError;

pub(crate) fn into_status_error(error: SubCategoriesServiceError) -> StatusError {
    match error {
        SubCategoriesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Sub-category code already used in this category")
        }
        SubCategoriesServiceError::InvalidReference => {
            StatusError::bad_request().brief("Category does not exist")
        }
        SubCategoriesServiceError::MissingRequiredData
        | SubCategoriesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid sub-category payload")
        }
        SubCategoriesServiceError::NotFound => StatusError::not_found(),
        SubCategoriesServiceError::Sql(source) => {
            error!("sub-category storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
