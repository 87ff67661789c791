//! Sync Models

use std::{fmt, num::NonZeroUsize, time::Duration};

use crate::domain::{
    categories::records::CategoryUuid,
    sub_categories::records::SubCategoryUuid,
    sync::{errors::SyncItemError, reconcile::ReconcileEffect},
};

/// Sales status derived for a provider SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateStatus {
    Active,
    Inactive,
    OutOfStock,
}

impl CandidateStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provider SKU priced for sale. Monetary amounts are in the smallest
/// currency unit and already fit the storage width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedCandidate {
    /// Slug of the provider the SKU came from.
    pub provider: String,
    pub sku_code: String,
    pub name: String,
    pub category_hint: String,
    pub brand: String,
    pub item_type: String,
    pub description: String,
    pub seller_name: String,
    pub cost_price: i32,
    pub selling_price: i32,

    /// Percentage, rounded to an integer.
    pub profit_margin: i32,

    pub stock: i32,
    pub unlimited_stock: bool,
    pub status: CandidateStatus,

    /// Both the buyer and the seller side are enabled.
    pub available: bool,

    pub start_cut_off: String,
    pub end_cut_off: String,
    pub supports_multi: bool,

    /// Set once the category resolver has matched the SKU.
    pub category: Option<CategoryUuid>,
    pub sub_category: Option<SubCategoryUuid>,
}

/// Knobs for one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// How many SKUs are resolved and reconciled at once.
    pub concurrency: NonZeroUsize,

    /// Bound on the whole run, fetch included.
    pub timeout: Option<Duration>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            concurrency: NonZeroUsize::MIN,
            timeout: None,
        }
    }
}

/// Why a SKU was left out of storage without an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    #[error("{field} {value} does not fit the price columns")]
    Overflow { field: &'static str, value: i64 },

    #[error("no category matches brand {brand:?} or name {category:?}")]
    CategoryNotFound { category: String, brand: String },

    #[error("sync deadline passed before the item was processed")]
    DeadlineExceeded,
}

/// What happened to one SKU during a run.
#[derive(Debug)]
pub enum SyncOutcome {
    Reconciled {
        candidate: MappedCandidate,
        effect: ReconcileEffect,
    },
    Skipped {
        sku: String,
        reason: SkipReason,
    },
    Failed {
        sku: String,
        error: SyncItemError,
    },
}

impl SyncOutcome {
    #[must_use]
    pub fn sku(&self) -> &str {
        match self {
            Self::Reconciled { candidate, .. } => &candidate.sku_code,
            Self::Skipped { sku, .. } | Self::Failed { sku, .. } => sku,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Reconciled { .. } => "reconciled",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Result of a sync run, one outcome per fetched SKU in provider order.
#[derive(Debug)]
pub struct SyncReport {
    pub provider: String,
    pub fetched: usize,
    pub outcomes: Vec<SyncOutcome>,
}

impl SyncReport {
    /// Candidates that reached storage.
    pub fn reconciled(&self) -> impl Iterator<Item = &MappedCandidate> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            SyncOutcome::Reconciled { candidate, .. } => Some(candidate),
            SyncOutcome::Skipped { .. } | SyncOutcome::Failed { .. } => None,
        })
    }

    /// Number of reconciled candidates.
    #[must_use]
    pub fn count(&self) -> usize {
        self.reconciled().count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SyncOutcome::Skipped { .. }))
            .count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SyncOutcome::Failed { .. }))
            .count()
    }
}
