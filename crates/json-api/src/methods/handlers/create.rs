//! Create Payment Method Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use otomax_app::domain::methods::{data::NewMethod, records::MethodUuid};

use crate::{
    extensions::*,
    methods::{
        errors::into_status_error,
        handlers::{FeeTypePayload, KindPayload, MethodResponse, StatusPayload},
    },
    state::State,
};

/// Create Payment Method Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateMethodRequest {
    /// Aggregator payment method code, e.g. `BC`
    pub code: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub kind: KindPayload,

    #[serde(default)]
    pub image: String,

    pub min_amount: i32,
    pub max_amount: i32,

    #[serde(default)]
    pub fee: Option<i32>,

    #[serde(default)]
    pub fee_type: Option<FeeTypePayload>,

    /// Defaults to `active`
    #[serde(default)]
    pub status: Option<StatusPayload>,
}

impl From<CreateMethodRequest> for NewMethod {
    fn from(request: CreateMethodRequest) -> Self {
        NewMethod {
            uuid: MethodUuid::new(),
            code: request.code,
            name: request.name,
            description: request.description,
            kind: request.kind.into(),
            image: request.image,
            min_amount: request.min_amount,
            max_amount: request.max_amount,
            fee: request.fee,
            fee_type: request.fee_type.map(Into::into),
            status: request.status.map(Into::into).unwrap_or_default(),
        }
    }
}

/// Create Payment Method Handler
#[endpoint(
    tags("methods"),
    summary = "Create Payment Method",
    responses(
        (status_code = StatusCode::CREATED, description = "Payment method created"),
        (status_code = StatusCode::CONFLICT, description = "Code already used"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateMethodRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<MethodResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .app
        .methods
        .create_method(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/methods/{}", record.code), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(record.into()))
}
