//! Delete Sub-category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State, sub_categories::errors::into_status_error};

/// Delete Sub-category Handler
#[endpoint(
    tags("sub-categories"),
    summary = "Delete Sub-category",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Sub-category deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Sub-category not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    sub_category: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .sub_categories
        .delete_sub_category(sub_category.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
