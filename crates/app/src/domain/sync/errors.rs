//! Sync errors.

use thiserror::Error;

use crate::{
    domain::{categories::CategoriesServiceError, sync::reconcile::ReconcileError},
    integrations::digiflazz::ProviderError,
};

/// Failures that abort a whole run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("unknown provider {0:?}")]
    UnknownProvider(String),

    #[error("could not fetch the {provider} catalog")]
    Fetch {
        provider: String,
        #[source]
        source: ProviderError,
    },
}

/// Failures of a single SKU; the run carries on.
#[derive(Debug, Error)]
pub enum SyncItemError {
    #[error("category lookup failed")]
    Category(#[from] CategoriesServiceError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error("sync deadline passed before the item was committed")]
    DeadlineExceeded,
}
