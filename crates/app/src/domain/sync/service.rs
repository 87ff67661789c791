//! Sync orchestrator.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use futures::{StreamExt, stream};
use mockall::automock;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::{
    domain::{
        categories::{CategoriesService, CategoriesServiceError},
        sync::{
            deadline::{passed, within},
            errors::{SyncError, SyncItemError},
            mapper::{MapError, PricingPolicy, map_sku},
            models::{MappedCandidate, SkipReason, SyncOptions, SyncOutcome, SyncReport},
            reconcile::{ReconcileError, Reconciler},
        },
    },
    integrations::digiflazz::{ProviderClient, ProviderError, RawProviderSku},
};

#[automock]
#[async_trait]
pub trait SyncService: Send + Sync {
    /// Pull the provider's catalog and reconcile every SKU into storage.
    ///
    /// Fails only when the provider is unknown or the catalog cannot be
    /// fetched. Per-SKU problems are reported as outcomes.
    async fn run_sync(
        &self,
        provider: &str,
        options: SyncOptions,
    ) -> Result<SyncReport, SyncError>;
}

pub struct CatalogSyncService {
    providers: Vec<Arc<dyn ProviderClient>>,
    categories: Arc<dyn CategoriesService>,
    reconciler: Arc<dyn Reconciler>,
    pricing: PricingPolicy,
}

impl std::fmt::Debug for CatalogSyncService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let providers: Vec<_> = self.providers.iter().map(|client| client.slug()).collect();

        f.debug_struct("CatalogSyncService")
            .field("providers", &providers)
            .field("pricing", &self.pricing)
            .finish_non_exhaustive()
    }
}

impl CatalogSyncService {
    #[must_use]
    pub fn new(
        providers: Vec<Arc<dyn ProviderClient>>,
        categories: Arc<dyn CategoriesService>,
        reconciler: Arc<dyn Reconciler>,
        pricing: PricingPolicy,
    ) -> Self {
        Self {
            providers,
            categories,
            reconciler,
            pricing,
        }
    }

    /// SKUs of one group share a code and run one after the other.
    async fn process_group(
        &self,
        provider: &str,
        group: Vec<(usize, RawProviderSku)>,
        deadline: Option<Instant>,
    ) -> Vec<(usize, SyncOutcome)> {
        let mut outcomes = Vec::with_capacity(group.len());

        for (index, sku) in group {
            outcomes.push((index, self.process(provider, &sku, deadline).await));
        }

        outcomes
    }

    async fn process(
        &self,
        provider: &str,
        sku: &RawProviderSku,
        deadline: Option<Instant>,
    ) -> SyncOutcome {
        if passed(deadline) {
            warn!(sku = %sku.sku_code, "skipping sku: sync deadline passed");

            return SyncOutcome::Skipped {
                sku: sku.sku_code.clone(),
                reason: SkipReason::DeadlineExceeded,
            };
        }

        let candidate = match map_sku(sku, provider, &self.pricing) {
            Ok(candidate) => candidate,
            Err(MapError::Overflow { sku, field, value }) => {
                warn!(%sku, field, value, "skipping sku: value overflows storage");

                return SyncOutcome::Skipped {
                    sku,
                    reason: SkipReason::Overflow { field, value },
                };
            }
        };

        self.store(candidate, deadline).await
    }

    async fn store(
        &self,
        mut candidate: MappedCandidate,
        deadline: Option<Instant>,
    ) -> SyncOutcome {
        let sku = candidate.sku_code.clone();

        let lookup = self.categories.resolve_category(
            &candidate.category_hint,
            &candidate.brand,
            &candidate.item_type,
        );

        let Some(lookup) = within(deadline, lookup).await else {
            warn!(%sku, "sync deadline passed during category lookup");

            return SyncOutcome::Failed {
                sku,
                error: SyncItemError::DeadlineExceeded,
            };
        };

        let resolution = match lookup {
            Ok(resolution) => resolution,
            Err(CategoriesServiceError::CategoryNotFound { category, brand }) => {
                warn!(%sku, %category, %brand, "skipping sku: no matching category");

                return SyncOutcome::Skipped {
                    sku,
                    reason: SkipReason::CategoryNotFound { category, brand },
                };
            }
            Err(source) => {
                error!(%sku, "category lookup failed: {source}");

                return SyncOutcome::Failed {
                    sku,
                    error: source.into(),
                };
            }
        };

        candidate.category = Some(resolution.category);
        candidate.sub_category = resolution.sub_category.uuid();

        match self.reconciler.reconcile(&candidate, deadline).await {
            Ok(effect) => SyncOutcome::Reconciled { candidate, effect },
            Err(ReconcileError::DeadlineExceeded { .. }) => {
                warn!(%sku, "sync deadline passed before commit");

                SyncOutcome::Failed {
                    sku,
                    error: SyncItemError::DeadlineExceeded,
                }
            }
            Err(source) => {
                error!(%sku, "reconcile failed: {source}");

                SyncOutcome::Failed {
                    sku,
                    error: source.into(),
                }
            }
        }
    }
}

#[async_trait]
impl SyncService for CatalogSyncService {
    #[tracing::instrument(
        name = "sync.run",
        skip(self, options),
        fields(concurrency = options.concurrency.get())
    )]
    async fn run_sync(
        &self,
        provider: &str,
        options: SyncOptions,
    ) -> Result<SyncReport, SyncError> {
        let client = self
            .providers
            .iter()
            .find(|client| client.slug() == provider)
            .ok_or_else(|| SyncError::UnknownProvider(provider.to_string()))?;

        let deadline = options.timeout.map(|timeout| Instant::now() + timeout);

        let skus = within(deadline, client.fetch_catalog(deadline))
            .await
            .unwrap_or(Err(ProviderError::DeadlineExceeded))
            .map_err(|source| {
                error!("failed to fetch {provider} catalog: {source}");

                SyncError::Fetch {
                    provider: provider.to_string(),
                    source,
                }
            })?;

        let fetched = skus.len();
        let slug = client.slug();

        let groups: Vec<Vec<(usize, SyncOutcome)>> = stream::iter(group_by_sku(skus))
            .map(|group| self.process_group(slug, group, deadline))
            .buffered(options.concurrency.get())
            .collect()
            .await;

        let mut indexed: Vec<(usize, SyncOutcome)> = groups.into_iter().flatten().collect();
        indexed.sort_by_key(|(index, _)| *index);

        let report = SyncReport {
            provider: slug.to_string(),
            fetched,
            outcomes: indexed.into_iter().map(|(_, outcome)| outcome).collect(),
        };

        info!(
            fetched,
            reconciled = report.count(),
            skipped = report.skipped(),
            failed = report.failed(),
            "sync finished"
        );

        Ok(report)
    }
}

/// Group SKUs by code, keeping each SKU's position in the price list. Groups
/// are ordered by first appearance.
fn group_by_sku(skus: Vec<RawProviderSku>) -> Vec<Vec<(usize, RawProviderSku)>> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<(usize, RawProviderSku)>> = Vec::new();

    for (index, sku) in skus.into_iter().enumerate() {
        let slot = *positions.entry(sku.sku_code.clone()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });

        if let Some(group) = groups.get_mut(slot) {
            group.push((index, sku));
        }
    }

    groups
}
