//! Sub-category Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*, state::State, sub_categories::errors::into_status_error,
    sub_categories::handlers::SubCategoryResponse,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubCategoriesResponse {
    pub sub_categories: Vec<SubCategoryResponse>,
}

/// Sub-category Index Handler
///
/// Lists sub-categories, optionally only those of one category.
#[endpoint(tags("sub-categories"), summary = "List Sub-categories")]
pub(crate) async fn handler(
    category: QueryParam<Uuid, false>,
    depot: &mut Depot,
) -> Result<Json<SubCategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let sub_categories = state
        .app
        .sub_categories
        .list_sub_categories(category.into_inner().map(Into::into))
        .await
        .map_err(into_status_error)?;

    Ok(Json(SubCategoriesResponse {
        sub_categories: sub_categories.into_iter().map(Into::into).collect(),
    }))
}
