//! Deposit Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    deposits::{errors::into_status_error, handlers::DepositResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DepositsResponse {
    /// Newest first
    pub deposits: Vec<DepositResponse>,
}

/// Deposit Index Handler
#[endpoint(tags("deposits"), summary = "List Deposits")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DepositsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let deposits = state
        .app
        .deposits
        .list_deposits()
        .await
        .map_err(into_status_error)?;

    Ok(Json(DepositsResponse {
        deposits: deposits.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use otomax_app::domain::deposits::{DepositsServiceError, MockDepositsService};

    use crate::test_helpers::{deposits_service, make_deposit};

    use super::*;

    fn make_service(deposits: MockDepositsService) -> Service {
        deposits_service(deposits, Router::with_path("deposits").get(handler))
    }

    #[tokio::test]
    async fn test_index_keeps_service_order() -> TestResult {
        let mut deposits = MockDepositsService::new();

        deposits.expect_list_deposits().once().return_once(|| {
            Ok(vec![
                make_deposit("TRX2", 20_000),
                make_deposit("TRX1", 10_000),
            ])
        });

        let response: DepositsResponse = TestClient::get("http://example.com/deposits")
            .send(&make_service(deposits))
            .await
            .take_json()
            .await?;

        let order_ids: Vec<_> = response.deposits.iter().map(|d| d.order_id.as_str()).collect();

        assert_eq!(order_ids, ["TRX2", "TRX1"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut deposits = MockDepositsService::new();

        deposits
            .expect_list_deposits()
            .once()
            .return_once(|| Err(DepositsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/deposits")
            .send(&make_service(deposits))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
