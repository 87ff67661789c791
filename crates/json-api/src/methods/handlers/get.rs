//! Get Payment Method Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    methods::{errors::into_status_error, handlers::MethodResponse},
    state::State,
};

/// Get Payment Method Handler
#[endpoint(tags("methods"), summary = "Get Payment Method")]
pub(crate) async fn handler(
    code: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MethodResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .methods
        .get_method(&code.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use otomax_app::domain::methods::{MethodsServiceError, MockMethodsService};

    use crate::test_helpers::{make_method, methods_service};

    use super::*;

    fn make_service(methods: MockMethodsService) -> Service {
        methods_service(methods, Router::with_path("methods/{code}").get(handler))
    }

    #[tokio::test]
    async fn test_get_method_success() -> TestResult {
        let mut methods = MockMethodsService::new();

        methods
            .expect_get_method()
            .once()
            .withf(|code| code == "BC")
            .return_once(|code| Ok(make_method(code)));

        let mut res = TestClient::get("http://example.com/methods/BC")
            .send(&make_service(methods))
            .await;

        let body: MethodResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.code, "BC");
        assert_eq!(body.min_amount, 10_000);
        assert_eq!(body.status, "active");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_method_not_found_returns_404() -> TestResult {
        let mut methods = MockMethodsService::new();

        methods
            .expect_get_method()
            .once()
            .return_once(|_| Err(MethodsServiceError::NotFound));

        let res = TestClient::get("http://example.com/methods/NOPE")
            .send(&make_service(methods))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
