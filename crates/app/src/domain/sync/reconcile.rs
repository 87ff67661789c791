//! Reconciliation of mapped candidates into `provider_products` and `products`.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use thiserror::Error;
use tokio::time::Instant;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        categories::records::CategoryUuid,
        sync::{
            deadline::{passed, within},
            models::MappedCandidate,
            records::{ProductUuid, ProviderProductUuid},
            repositories::{
                products::PgProductsRepository, provider_products::PgProviderProductsRepository,
            },
        },
    },
};

/// Whether a row was created or refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Inserted,
    Updated,
}

impl WriteKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
        }
    }
}

/// The writes one reconciliation committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileEffect {
    pub provider_product_uuid: ProviderProductUuid,
    pub provider_product: WriteKind,
    pub product_uuid: ProductUuid,
    pub product: WriteKind,
}

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("provider {provider:?} is not registered")]
    UnknownProvider { provider: String },

    #[error("{sku} has no resolved category")]
    MissingCategory { sku: String },

    /// The deadline was reached before the commit was issued. Nothing was
    /// written.
    #[error("deadline reached before {sku} was committed")]
    DeadlineExceeded { sku: String },

    #[error("could not persist {sku}")]
    Persistence {
        sku: String,
        #[source]
        source: sqlx::Error,
    },
}

/// Writes one candidate to storage.
#[automock]
#[async_trait]
pub trait Reconciler: Send + Sync {
    /// Insert or update the candidate's provider-product and catalog product
    /// rows atomically.
    ///
    /// The deadline bounds the work before the commit. A commit that has been
    /// issued always runs to completion, so `Ok` means the rows are stored and
    /// an error means they are not.
    async fn reconcile(
        &self,
        candidate: &MappedCandidate,
        deadline: Option<Instant>,
    ) -> Result<ReconcileEffect, ReconcileError>;
}

#[derive(Debug, Clone)]
pub struct PgReconciler {
    db: Db,
    provider_products: PgProviderProductsRepository,
    products: PgProductsRepository,
}

impl PgReconciler {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            provider_products: PgProviderProductsRepository::new(),
            products: PgProductsRepository::new(),
        }
    }

    /// Run every write of the reconciliation inside an open transaction.
    /// Dropping the returned transaction rolls the writes back.
    async fn stage(
        &self,
        candidate: &MappedCandidate,
        category: CategoryUuid,
    ) -> Result<(Transaction<'static, Postgres>, ReconcileEffect), ReconcileError> {
        let sku = candidate.sku_code.as_str();

        let persistence = |source: sqlx::Error| ReconcileError::Persistence {
            sku: sku.to_string(),
            source,
        };

        let mut tx = self.db.begin().await.map_err(persistence)?;

        let Some(provider) = self
            .provider_products
            .find_provider(&mut tx, &candidate.provider)
            .await
            .map_err(persistence)?
        else {
            return Err(ReconcileError::UnknownProvider {
                provider: candidate.provider.clone(),
            });
        };

        let existing = self
            .provider_products
            .find_provider_product(&mut tx, provider.uuid, sku)
            .await
            .map_err(persistence)?;

        let linked = existing.as_ref().and_then(|record| record.product_uuid);

        let refreshed = match linked {
            Some(product) => {
                let rows = self
                    .products
                    .update_product_pricing(&mut tx, product, candidate)
                    .await
                    .map_err(persistence)?;

                (rows > 0).then_some(product)
            }
            None => None,
        };

        let (product_uuid, product) = match refreshed {
            Some(product) => (product, WriteKind::Updated),
            None => {
                let product = self
                    .products
                    .insert_product(&mut tx, candidate, category)
                    .await
                    .map_err(persistence)?;

                (product, WriteKind::Inserted)
            }
        };

        let (provider_product_uuid, provider_product) = match existing {
            Some(record) => {
                self.provider_products
                    .update_provider_product(&mut tx, record.uuid, product_uuid, candidate)
                    .await
                    .map_err(persistence)?;

                (record.uuid, WriteKind::Updated)
            }
            None => {
                let uuid = self
                    .provider_products
                    .insert_provider_product(&mut tx, provider.uuid, product_uuid, candidate)
                    .await
                    .map_err(persistence)?;

                (uuid, WriteKind::Inserted)
            }
        };

        Ok((
            tx,
            ReconcileEffect {
                provider_product_uuid,
                provider_product,
                product_uuid,
                product,
            },
        ))
    }
}

#[async_trait]
impl Reconciler for PgReconciler {
    async fn reconcile(
        &self,
        candidate: &MappedCandidate,
        deadline: Option<Instant>,
    ) -> Result<ReconcileEffect, ReconcileError> {
        let sku = candidate.sku_code.as_str();

        let Some(category) = candidate.category else {
            return Err(ReconcileError::MissingCategory {
                sku: sku.to_string(),
            });
        };

        let cut_off = || ReconcileError::DeadlineExceeded {
            sku: sku.to_string(),
        };

        if passed(deadline) {
            return Err(cut_off());
        }

        let (tx, effect) = within(deadline, self.stage(candidate, category))
            .await
            .ok_or_else(cut_off)??;

        // Not bounded by the deadline.
        tx.commit()
            .await
            .map_err(|source| ReconcileError::Persistence {
                sku: sku.to_string(),
                source,
            })?;

        debug!(
            sku,
            provider_product = effect.provider_product.as_str(),
            product = effect.product.as_str(),
            "reconciled"
        );

        Ok(effect)
    }
}
