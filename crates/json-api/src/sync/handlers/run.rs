//! Run Sync Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use otomax_app::domain::sync::models::{MappedCandidate, SyncOutcome, SyncReport};

use crate::{extensions::*, state::State, sync::errors::into_status_error};

const SYNC_MESSAGE: &str = "Products retrieved and processed successfully";

/// A provider SKU as it was stored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CandidateResponse {
    pub provider: String,
    pub sku_code: String,
    pub name: String,

    /// Category name reported by the provider
    pub category: String,

    pub brand: String,
    pub item_type: String,
    pub description: String,
    pub seller_name: String,

    /// Provider cost in rupiah
    pub cost_price: i32,

    /// Cost plus markup in rupiah
    pub selling_price: i32,

    /// Whole percent
    pub profit_margin: i32,

    pub stock: i32,
    pub unlimited_stock: bool,

    /// One of `active`, `inactive`, `out_of_stock`
    pub status: String,

    pub available: bool,
    pub start_cut_off: String,
    pub end_cut_off: String,
    pub supports_multi: bool,
    pub category_uuid: Option<Uuid>,
    pub sub_category_uuid: Option<Uuid>,
}

impl From<&MappedCandidate> for CandidateResponse {
    fn from(candidate: &MappedCandidate) -> Self {
        CandidateResponse {
            provider: candidate.provider.clone(),
            sku_code: candidate.sku_code.clone(),
            name: candidate.name.clone(),
            category: candidate.category_hint.clone(),
            brand: candidate.brand.clone(),
            item_type: candidate.item_type.clone(),
            description: candidate.description.clone(),
            seller_name: candidate.seller_name.clone(),
            cost_price: candidate.cost_price,
            selling_price: candidate.selling_price,
            profit_margin: candidate.profit_margin,
            stock: candidate.stock,
            unlimited_stock: candidate.unlimited_stock,
            status: candidate.status.to_string(),
            available: candidate.available,
            start_cut_off: candidate.start_cut_off.clone(),
            end_cut_off: candidate.end_cut_off.clone(),
            supports_multi: candidate.supports_multi,
            category_uuid: candidate.category.map(Into::into),
            sub_category_uuid: candidate.sub_category.map(Into::into),
        }
    }
}

/// Per-SKU result of the run.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OutcomeResponse {
    pub sku: String,

    /// One of `reconciled`, `skipped`, `failed`
    pub outcome: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&SyncOutcome> for OutcomeResponse {
    fn from(outcome: &SyncOutcome) -> Self {
        let reason = match outcome {
            SyncOutcome::Reconciled { .. } => None,
            SyncOutcome::Skipped { reason, .. } => Some(reason.to_string()),
            SyncOutcome::Failed { error, .. } => Some(error.to_string()),
        };

        OutcomeResponse {
            sku: outcome.sku().to_string(),
            outcome: outcome.label().to_string(),
            reason,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SyncResponse {
    pub error: bool,
    pub message: String,

    /// Candidates that reached storage, in provider order
    pub data: Vec<CandidateResponse>,

    pub count: usize,
    pub fetched: usize,
    pub skipped: usize,
    pub failed: usize,
    pub outcomes: Vec<OutcomeResponse>,
}

impl From<SyncReport> for SyncResponse {
    fn from(report: SyncReport) -> Self {
        SyncResponse {
            error: false,
            message: SYNC_MESSAGE.to_string(),
            data: report.reconciled().map(Into::into).collect(),
            count: report.count(),
            fetched: report.fetched,
            skipped: report.skipped(),
            failed: report.failed(),
            outcomes: report.outcomes.iter().map(Into::into).collect(),
        }
    }
}

/// Run Sync Handler
///
/// Pulls the provider's price list and reconciles it into the catalog.
#[endpoint(
    tags("sync"),
    summary = "Sync Provider Products",
    responses(
        (status_code = StatusCode::OK, description = "Catalog synced"),
        (status_code = StatusCode::NOT_FOUND, description = "Unknown provider"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Provider fetch failed"),
    ),
)]
#[tracing::instrument(
    name = "sync.http",
    skip(provider, depot),
    fields(provider = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    provider: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<SyncResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let provider = provider.into_inner();

    tracing::Span::current().record("provider", tracing::field::display(&provider));

    let report = state
        .app
        .sync
        .run_sync(&provider, state.sync_options)
        .await
        .map_err(into_status_error)?;

    tracing::info!(
        provider = %provider,
        fetched = report.fetched,
        reconciled = report.count(),
        skipped = report.skipped(),
        failed = report.failed(),
        "sync finished"
    );

    Ok(Json(report.into()))
}
