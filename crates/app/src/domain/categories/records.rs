//! Category Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub name: String,
    pub sub_name: String,
    pub brand: String,
    pub code: String,
    pub status: String,
    pub thumbnail: String,
    pub banner: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
