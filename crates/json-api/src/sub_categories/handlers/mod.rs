//! Sub-category Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use otomax_app::domain::sub_categories::records::{SubCategoryRecord, SubCategoryStatus};

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum StatusPayload {
    Active,
    Inactive,
}

impl From<StatusPayload> for SubCategoryStatus {
    fn from(status: StatusPayload) -> Self {
        match status {
            StatusPayload::Active => SubCategoryStatus::Active,
            StatusPayload::Inactive => SubCategoryStatus::Inactive,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubCategoryResponse {
    pub uuid: Uuid,
    pub category_uuid: Uuid,
    pub code: String,
    pub name: String,

    /// `active` or `inactive`
    pub status: String,

    pub created_at: String,
    pub updated_at: String,
}

impl From<SubCategoryRecord> for SubCategoryResponse {
    fn from(record: SubCategoryRecord) -> Self {
        SubCategoryResponse {
            uuid: record.uuid.into(),
            category_uuid: record.category_uuid.into(),
            code: record.code,
            name: record.name,
            status: record.status.to_string(),
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}
