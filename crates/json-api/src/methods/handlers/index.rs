//! Payment Method Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use otomax_app::domain::methods::records::MethodKind;

use crate::{
    extensions::*,
    methods::{errors::into_status_error, handlers::MethodResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MethodsResponse {
    pub methods: Vec<MethodResponse>,
}

/// Payment Method Index Handler
///
/// Lists payment methods grouped by kind, optionally only one kind.
#[endpoint(tags("methods"), summary = "List Payment Methods")]
pub(crate) async fn handler(
    kind: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<MethodsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let kind = kind
        .into_inner()
        .map(|kind| kind.parse::<MethodKind>())
        .transpose()
        .map_err(|e| StatusError::bad_request().brief(e.to_string()))?;

    let methods = state
        .app
        .methods
        .list_methods(kind)
        .await
        .map_err(into_status_error)?;

    Ok(Json(MethodsResponse {
        methods: methods.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use otomax_app::domain::methods::{MethodsServiceError, MockMethodsService};

    use crate::test_helpers::{make_method, methods_service};

    use super::*;

    fn make_service(methods: MockMethodsService) -> Service {
        methods_service(methods, Router::with_path("methods").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_all_methods() -> TestResult {
        let mut methods = MockMethodsService::new();

        methods
            .expect_list_methods()
            .once()
            .withf(Option::is_none)
            .return_once(|_| Ok(vec![make_method("OV"), make_method("BC")]));

        let response: MethodsResponse = TestClient::get("http://example.com/methods")
            .send(&make_service(methods))
            .await
            .take_json()
            .await?;

        assert_eq!(response.methods.len(), 2);
        assert_eq!(response.methods[0].code, "OV");
        assert_eq!(response.methods[1].kind, "VIRTUAL_ACCOUNT");
        assert_eq!(response.methods[1].fee_type.as_deref(), Some("FIXED"));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_kind() -> TestResult {
        let mut methods = MockMethodsService::new();

        methods
            .expect_list_methods()
            .once()
            .withf(|kind| *kind == Some(MethodKind::ConvenienceStore))
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/methods?kind=CS_STORE")
            .send(&make_service(methods))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_kind_returns_400() -> TestResult {
        let mut methods = MockMethodsService::new();

        methods.expect_list_methods().never();

        let res = TestClient::get("http://example.com/methods?kind=CASH")
            .send(&make_service(methods))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut methods = MockMethodsService::new();

        methods
            .expect_list_methods()
            .once()
            .return_once(|_| Err(MethodsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/methods")
            .send(&make_service(methods))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
