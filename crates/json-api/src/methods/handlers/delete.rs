//! Delete Payment Method Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, methods::errors::into_status_error, state::State};

/// Delete Payment Method Handler
///
/// Deposits already opened with the method keep their stored code.
#[endpoint(
    tags("methods"),
    summary = "Delete Payment Method",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Payment method deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Payment method not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    code: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .methods
        .delete_method(&code.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
