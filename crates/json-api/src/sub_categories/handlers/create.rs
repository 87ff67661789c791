//! Create Sub-category Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use otomax_app::domain::sub_categories::{data::NewSubCategory, records::SubCategoryUuid};

use crate::{
    extensions::*,
    state::State,
    sub_categories::{
        errors::into_status_error,
        handlers::{StatusPayload, SubCategoryResponse},
    },
};

/// Create Sub-category Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateSubCategoryRequest {
    pub category_uuid: Uuid,
    pub code: String,
    pub name: String,

    /// Defaults to `active`
    #[serde(default)]
    pub status: Option<StatusPayload>,
}

impl From<CreateSubCategoryRequest> for NewSubCategory {
    fn from(request: CreateSubCategoryRequest) -> Self {
        NewSubCategory {
            uuid: SubCategoryUuid::new(),
            category_uuid: request.category_uuid.into(),
            code: request.code,
            name: request.name,
            status: request.status.map(Into::into).unwrap_or_default(),
        }
    }
}

/// Create Sub-category Handler
#[endpoint(
    tags("sub-categories"),
    summary = "Create Sub-category",
    responses(
        (status_code = StatusCode::CREATED, description = "Sub-category created"),
        (status_code = StatusCode::CONFLICT, description = "Code already used"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateSubCategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubCategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .sub_categories
        .create_sub_category(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/sub-categories/{}", record.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(record.into()))
}
