//! Deposit Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use otomax_app::domain::deposits::records::DepositRecord;

pub(crate) mod create;
pub(crate) mod index;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DepositResponse {
    pub uuid: Uuid,

    /// Merchant order id sent to the payment gateway
    pub order_id: String,

    pub username: String,
    pub method: String,
    pub amount: u32,
    pub destination_number: String,
    pub payment_reference: Option<String>,

    /// Where the payer completes the payment
    pub payment_url: Option<String>,

    /// `pending`, `paid` or `failed`
    pub status: String,

    pub created_at: String,
}

impl From<DepositRecord> for DepositResponse {
    fn from(record: DepositRecord) -> Self {
        DepositResponse {
            uuid: record.uuid.into(),
            order_id: record.order_id,
            username: record.username,
            method: record.method,
            amount: record.amount,
            destination_number: record.destination_number,
            payment_reference: record.payment_reference,
            payment_url: record.payment_url,
            status: record.status.to_string(),
            created_at: record.created_at.to_string(),
        }
    }
}
