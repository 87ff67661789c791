//! Get Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    categories::{errors::into_status_error, handlers::CategoryResponse},
    extensions::*,
    state::State,
};

/// Get Category Handler
#[endpoint(tags("categories"), summary = "Get Category")]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .categories
        .get_category(category.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use otomax_app::domain::categories::{
        CategoriesServiceError, MockCategoriesService, records::CategoryUuid,
    };

    use crate::test_helpers::{categories_service, make_category};

    use super::*;

    fn make_service(categories: MockCategoriesService) -> Service {
        categories_service(
            categories,
            Router::with_path("categories/{category}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_category_success() -> TestResult {
        let uuid = CategoryUuid::new();

        let mut categories = MockCategoriesService::new();

        categories
            .expect_get_category()
            .once()
            .withf(move |given| *given == uuid)
            .return_once(move |_| Ok(make_category(uuid)));

        let mut res = TestClient::get(format!("http://example.com/categories/{uuid}"))
            .send(&make_service(categories))
            .await;

        let body: CategoryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.uuid, uuid.into_uuid());
        assert_eq!(body.code, "pulsa-telkomsel");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_category_not_found_returns_404() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_get_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/categories/{}",
            CategoryUuid::new()
        ))
        .send(&make_service(categories))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_category_invalid_uuid_returns_400() -> TestResult {
        let mut categories = MockCategoriesService::new();

        categories.expect_get_category().never();

        let res = TestClient::get("http://example.com/categories/pulsa")
            .send(&make_service(categories))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
