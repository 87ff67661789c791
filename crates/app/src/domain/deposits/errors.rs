//! Deposits service errors.

use std::num::TryFromIntError;

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{domain::methods::MethodsServiceError, integrations::duitku::PaymentError};

#[derive(Debug, Error)]
pub enum DepositsServiceError {
    #[error("deposit already exists")]
    AlreadyExists,

    #[error("deposit not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("invalid amount value")]
    InvalidAmount(#[from] TryFromIntError),

    #[error("unknown payment method {0:?}")]
    UnknownMethod(String),

    #[error("payment method {0:?} is not active")]
    MethodUnavailable(String),

    #[error("amount must be between {min} and {max}")]
    AmountOutOfRange { min: i32, max: i32 },

    #[error("payment method lookup failed")]
    Method(#[source] MethodsServiceError),

    #[error("payment could not be opened")]
    Payment(#[from] PaymentError),
}

impl From<Error> for DepositsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => {
                Self::Sql(error)
            }
        }
    }
}
