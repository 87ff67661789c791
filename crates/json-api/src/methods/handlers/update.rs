//! Update Payment Method Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use otomax_app::domain::methods::data::MethodPatch;

use crate::{
    extensions::*,
    methods::{
        errors::into_status_error,
        handlers::{FeeTypePayload, KindPayload, MethodResponse, StatusPayload},
    },
    state::State,
};

/// Update Payment Method Request. Omitted fields are left unchanged.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateMethodRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<KindPayload>,
    pub image: Option<String>,
    pub min_amount: Option<i32>,
    pub max_amount: Option<i32>,
    pub fee: Option<i32>,
    pub fee_type: Option<FeeTypePayload>,
    pub status: Option<StatusPayload>,
}

impl From<UpdateMethodRequest> for MethodPatch {
    fn from(request: UpdateMethodRequest) -> Self {
        MethodPatch {
            name: request.name,
            description: request.description,
            kind: request.kind.map(Into::into),
            image: request.image,
            min_amount: request.min_amount,
            max_amount: request.max_amount,
            fee: request.fee,
            fee_type: request.fee_type.map(Into::into),
            status: request.status.map(Into::into),
        }
    }
}

/// Update Payment Method Handler
#[endpoint(
    tags("methods"),
    summary = "Update Payment Method",
    responses(
        (status_code = StatusCode::OK, description = "Payment method updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Payment method not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "methods.update",
    skip(code, json, depot),
    fields(method_code = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    code: PathParam<String>,
    json: JsonBody<UpdateMethodRequest>,
    depot: &mut Depot,
) -> Result<Json<MethodResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let code = code.into_inner();

    tracing::Span::current().record("method_code", code.as_str());

    let record = state
        .app
        .methods
        .update_method(&code, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(method_code = %code, "updated payment method");

    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use otomax_app::domain::methods::{
        MethodsServiceError, MockMethodsService, records::MethodStatus,
    };

    use crate::test_helpers::{make_method, methods_service};

    use super::*;

    fn make_service(methods: MockMethodsService) -> Service {
        methods_service(methods, Router::with_path("methods/{code}").patch(handler))
    }

    #[tokio::test]
    async fn test_update_sends_only_given_fields() -> TestResult {
        let mut methods = MockMethodsService::new();

        methods
            .expect_update_method()
            .once()
            .withf(|code, patch| {
                code == "BC"
                    && *patch
                        == MethodPatch {
                            status: Some(MethodStatus::Inactive),
                            max_amount: Some(1_000_000),
                            ..MethodPatch::default()
                        }
            })
            .return_once(|code, _| {
                let mut record = make_method(code);

                record.status = MethodStatus::Inactive;
                record.max_amount = 1_000_000;

                Ok(record)
            });

        let mut res = TestClient::patch("http://example.com/methods/BC")
            .json(&json!({ "status": "inactive", "max_amount": 1_000_000 }))
            .send(&make_service(methods))
            .await;

        let body: MethodResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.status, "inactive");
        assert_eq!(body.max_amount, 1_000_000);
        assert_eq!(body.min_amount, 10_000, "untouched fields keep their value");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_method_returns_404() -> TestResult {
        let mut methods = MockMethodsService::new();

        methods
            .expect_update_method()
            .once()
            .return_once(|_, _| Err(MethodsServiceError::NotFound));

        let res = TestClient::patch("http://example.com/methods/NOPE")
            .json(&json!({ "name": "Renamed" }))
            .send(&make_service(methods))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_bounds_returns_400() -> TestResult {
        let mut methods = MockMethodsService::new();

        methods
            .expect_update_method()
            .once()
            .withf(|_, patch| patch.min_amount == Some(-1))
            .return_once(|_, _| Err(MethodsServiceError::InvalidData));

        let res = TestClient::patch("http://example.com/methods/BC")
            .json(&json!({ "min_amount": -1 }))
            .send(&make_service(methods))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
