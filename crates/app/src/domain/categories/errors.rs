//! Categories service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CategoriesServiceError {
    /// Neither the brand nor the category name matched a category row.
    #[error("no category matches brand {brand:?} or name {category:?}")]
    CategoryNotFound { category: String, brand: String },

    #[error("category not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CategoriesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
