//! Sync Errors

use salvo::http::StatusError;
use tracing::error;

use otomax_app::domain::sync::SyncError;

pub(crate) fn into_status_error(error: SyncError) -> StatusError {
    match error {
        SyncError::UnknownProvider(provider) => {
            StatusError::not_found().brief(format!("Unknown provider: {provider}"))
        }
        SyncError::Fetch { provider, source } => {
            error!(provider = %provider, "failed to fetch catalog: {source}");

            StatusError::internal_server_error().brief(format!("Failed to get products: {source}"))
        }
    }
}
