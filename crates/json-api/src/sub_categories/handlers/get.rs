//! Get Sub-category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    sub_categories::{errors::into_status_error, handlers::SubCategoryResponse},
};

/// Get Sub-category Handler
#[endpoint(tags("sub-categories"), summary = "Get Sub-category")]
pub(crate) async fn handler(
    sub_category: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<SubCategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .sub_categories
        .get_sub_category(sub_category.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(record.into()))
}
