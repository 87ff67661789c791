//! Payment Method Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use otomax_app::domain::methods::records::{FeeType, MethodKind, MethodRecord, MethodStatus};

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) enum KindPayload {
    #[serde(rename = "EWALLET")]
    EWallet,
    #[serde(rename = "QRIS")]
    Qris,
    #[serde(rename = "VIRTUAL_ACCOUNT")]
    VirtualAccount,
    #[serde(rename = "CS_STORE")]
    ConvenienceStore,
}

impl From<KindPayload> for MethodKind {
    fn from(kind: KindPayload) -> Self {
        match kind {
            KindPayload::EWallet => MethodKind::EWallet,
            KindPayload::Qris => MethodKind::Qris,
            KindPayload::VirtualAccount => MethodKind::VirtualAccount,
            KindPayload::ConvenienceStore => MethodKind::ConvenienceStore,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum FeeTypePayload {
    Fixed,
    Percentage,
}

impl From<FeeTypePayload> for FeeType {
    fn from(fee_type: FeeTypePayload) -> Self {
        match fee_type {
            FeeTypePayload::Fixed => FeeType::Fixed,
            FeeTypePayload::Percentage => FeeType::Percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum StatusPayload {
    Active,
    Inactive,
}

impl From<StatusPayload> for MethodStatus {
    fn from(status: StatusPayload) -> Self {
        match status {
            StatusPayload::Active => MethodStatus::Active,
            StatusPayload::Inactive => MethodStatus::Inactive,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MethodResponse {
    pub uuid: Uuid,
    pub code: String,
    pub name: String,
    pub description: String,

    /// `EWALLET`, `QRIS`, `VIRTUAL_ACCOUNT` or `CS_STORE`
    pub kind: String,

    pub image: String,
    pub min_amount: i32,
    pub max_amount: i32,
    pub fee: Option<i32>,

    /// `FIXED` or `PERCENTAGE`
    pub fee_type: Option<String>,

    /// `active` or `inactive`
    pub status: String,

    pub created_at: String,
    pub updated_at: String,
}

impl From<MethodRecord> for MethodResponse {
    fn from(record: MethodRecord) -> Self {
        MethodResponse {
            uuid: record.uuid.into(),
            code: record.code,
            name: record.name,
            description: record.description,
            kind: record.kind.to_string(),
            image: record.image,
            min_amount: record.min_amount,
            max_amount: record.max_amount,
            fee: record.fee,
            fee_type: record.fee_type.map(|fee_type| fee_type.to_string()),
            status: record.status.to_string(),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}
