//! Sub-category Data

use crate::domain::{
    categories::records::CategoryUuid,
    sub_categories::records::{SubCategoryStatus, SubCategoryUuid},
};

/// New Sub-category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubCategory {
    pub uuid: SubCategoryUuid,
    pub category_uuid: CategoryUuid,
    pub code: String,
    pub name: String,
    pub status: SubCategoryStatus,
}

/// Partial update of a sub-category. `None` leaves the column as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubCategoryPatch {
    pub category_uuid: Option<CategoryUuid>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub status: Option<SubCategoryStatus>,
}

impl SubCategoryPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category_uuid.is_none()
            && self.code.is_none()
            && self.name.is_none()
            && self.status.is_none()
    }
}
