//! App Context

use std::sync::Arc;

use sqlx::PgPool;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        categories::{CategoriesService, PgCategoriesService},
        deposits::{DepositsService, PgDepositsService},
        methods::{MethodsService, PgMethodsService},
        sub_categories::{PgSubCategoriesService, SubCategoriesService},
        sync::{
            CatalogSyncService, SyncService, mapper::PricingPolicy, reconcile::PgReconciler,
        },
    },
    ids::OrderIdGenerator,
    integrations::{
        digiflazz::{DigiflazzClient, DigiflazzConfig, ProviderClient},
        duitku::{DuitkuClient, DuitkuConfig},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Upstream credentials and business settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub digiflazz: DigiflazzConfig,
    pub duitku: DuitkuConfig,
    pub pricing: PricingPolicy,
    pub deposit_order_id_prefix: String,
}

#[derive(Clone)]
pub struct AppContext {
    pub sync: Arc<dyn SyncService>,
    pub categories: Arc<dyn CategoriesService>,
    pub sub_categories: Arc<dyn SubCategoriesService>,
    pub methods: Arc<dyn MethodsService>,
    pub deposits: Arc<dyn DepositsService>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, config: AppConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_pool(pool, config))
    }

    /// Wire every service over an existing pool.
    #[must_use]
    pub fn from_pool(pool: PgPool, config: AppConfig) -> Self {
        let db = Db::new(pool);

        let categories = Arc::new(PgCategoriesService::new(db.clone()));
        let digiflazz: Arc<dyn ProviderClient> = Arc::new(DigiflazzClient::new(config.digiflazz));
        let ids = Arc::new(OrderIdGenerator::new(config.deposit_order_id_prefix));
        let methods = Arc::new(PgMethodsService::new(db.clone()));

        let sync = CatalogSyncService::new(
            vec![digiflazz],
            categories.clone(),
            Arc::new(PgReconciler::new(db.clone())),
            config.pricing,
        );

        Self {
            sync: Arc::new(sync),
            categories,
            sub_categories: Arc::new(PgSubCategoriesService::new(db.clone())),
            methods: methods.clone(),
            deposits: Arc::new(PgDepositsService::new(
                db,
                methods,
                Arc::new(DuitkuClient::new(config.duitku)),
                ids,
            )),
        }
    }
}
