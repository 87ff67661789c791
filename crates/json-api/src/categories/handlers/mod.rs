//! Category Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use otomax_app::domain::categories::records::CategoryRecord;

pub(crate) mod get;
pub(crate) mod index;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub uuid: Uuid,
    pub name: String,
    pub sub_name: String,
    pub brand: String,
    pub code: String,
    pub status: String,
    pub thumbnail: String,
    pub banner: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(record: CategoryRecord) -> Self {
        CategoryResponse {
            uuid: record.uuid.into(),
            name: record.name,
            sub_name: record.sub_name,
            brand: record.brand,
            code: record.code,
            status: record.status,
            thumbnail: record.thumbnail,
            banner: record.banner,
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}
