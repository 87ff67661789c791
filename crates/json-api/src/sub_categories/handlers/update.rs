//! Update Sub-category Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use otomax_app::domain::sub_categories::data::SubCategoryPatch;

use crate::{
    extensions::*,
    state::State,
    sub_categories::{
        errors::into_status_error,
        handlers::{StatusPayload, SubCategoryResponse},
    },
};

/// Update Sub-category Request. Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateSubCategoryRequest {
    pub category_uuid: Option<Uuid>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub status: Option<StatusPayload>,
}

impl From<UpdateSubCategoryRequest> for SubCategoryPatch {
    fn from(request: UpdateSubCategoryRequest) -> Self {
        SubCategoryPatch {
            category_uuid: request.category_uuid.map(Into::into),
            code: request.code,
            name: request.name,
            status: request.status.map(Into::into),
        }
    }
}

/// Update Sub-category Handler
#[endpoint(
    tags("sub-categories"),
    summary = "Update Sub-category",
    responses(
        (status_code = StatusCode::OK, description = "Sub-category updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Sub-category not found"),
        (status_code = StatusCode::CONFLICT, description = "Code already used"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "sub_categories.update",
    skip(sub_category, json, depot),
    fields(sub_category_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    sub_category: PathParam<Uuid>,
    json: JsonBody<UpdateSubCategoryRequest>,
    depot: &mut Depot,
) -> Result<Json<SubCategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let sub_category = sub_category.into_inner();

    tracing::Span::current().record("sub_category_uuid", tracing::field::display(sub_category));

    let record = state
        .app
        .sub_categories
        .update_sub_category(sub_category.into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(sub_category_uuid = %sub_category, "updated sub-category");

    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use otomax_app::domain::sub_categories::{
        MockSubCategoriesService, SubCategoriesServiceError,
        records::{SubCategoryStatus, SubCategoryUuid},
    };

    use crate::test_helpers::{make_sub_category, sub_categories_service};

    use super::*;

    fn make_service(sub_categories: MockSubCategoriesService) -> Service {
        sub_categories_service(
            sub_categories,
            Router::with_path("sub-categories/{sub_category}").patch(handler),
        )
    }

    #[tokio::test]
    async fn test_update_sends_only_given_fields() -> TestResult {
        let uuid = SubCategoryUuid::new();

        let mut sub_categories = MockSubCategoriesService::new();

        sub_categories
            .expect_update_sub_category()
            .once()
            .withf(move |given, patch| {
                *given == uuid
                    && *patch
                        == SubCategoryPatch {
                            status: Some(SubCategoryStatus::Inactive),
                            ..SubCategoryPatch::default()
                        }
            })
            .return_once(move |_, _| {
                let mut record = make_sub_category(uuid);

                record.status = SubCategoryStatus::Inactive;

                Ok(record)
            });

        let mut res = TestClient::patch(format!("http://example.com/sub-categories/{uuid}"))
            .json(&json!({ "status": "inactive" }))
            .send(&make_service(sub_categories))
            .await;

        let body: SubCategoryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "inactive");
        assert_eq!(body.name, "Reguler", "untouched fields keep their value");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_sub_category_returns_404() -> TestResult {
        let mut sub_categories = MockSubCategoriesService::new();

        sub_categories
            .expect_update_sub_category()
            .once()
            .return_once(|_, _| Err(SubCategoriesServiceError::NotFound));

        let res = TestClient::patch(format!(
            "http://example.com/sub-categories/{}",
            SubCategoryUuid::new()
        ))
        .json(&json!({ "name": "Promo" }))
        .send(&make_service(sub_categories))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_data_returns_400() -> TestResult {
        let mut sub_categories = MockSubCategoriesService::new();

        sub_categories
            .expect_update_sub_category()
            .once()
            .withf(|_, patch| patch.name.as_deref() == Some(""))
            .return_once(|_, _| Err(SubCategoriesServiceError::InvalidData));

        let res = TestClient::patch(format!(
            "http://example.com/sub-categories/{}",
            SubCategoryUuid::new()
        ))
        .json(&json!({ "name": "" }))
        .send(&make_service(sub_categories))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
