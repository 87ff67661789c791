//! Create Deposit Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use otomax_app::domain::deposits::data::NewDeposit;

use crate::{
    deposits::{errors::into_status_error, handlers::DepositResponse},
    extensions::*,
    state::State,
};

/// Create Deposit Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateDepositRequest {
    pub username: String,

    /// Payment method code, e.g. `VC` or `BC`
    pub method: String,

    /// Amount in rupiah
    pub amount: u64,

    pub destination_number: String,
}

impl From<CreateDepositRequest> for NewDeposit {
    fn from(request: CreateDepositRequest) -> Self {
        NewDeposit {
            username: request.username,
            method: request.method,
            amount: request.amount,
            destination_number: request.destination_number,
        }
    }
}

/// Create Deposit Handler
///
/// Opens a payment with the gateway and records the pending deposit.
#[endpoint(
    tags("deposits"),
    summary = "Create Deposit",
    responses(
        (status_code = StatusCode::CREATED, description = "Deposit created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Payment gateway failure"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "deposits.create", skip(json, depot, res), err)]
pub(crate) async fn handler(
    json: JsonBody<CreateDepositRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DepositResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let deposit = state
        .app
        .deposits
        .create_deposit(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!(order_id = %deposit.order_id, amount = deposit.amount, "deposit opened");

    res.status_code(StatusCode::CREATED);

    Ok(Json(deposit.into()))
}
