//! Payment Method Data

use crate::domain::methods::records::{FeeType, MethodKind, MethodStatus, MethodUuid};

/// New Payment Method Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMethod {
    pub uuid: MethodUuid,
    pub code: String,
    pub name: String,
    pub description: String,
    pub kind: MethodKind,
    pub image: String,
    pub min_amount: i32,
    pub max_amount: i32,
    pub fee: Option<i32>,
    pub fee_type: Option<FeeType>,
    pub status: MethodStatus,
}

/// Partial update of a payment method. `None` leaves the column as it is.
///
/// The code identifies the method and cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<MethodKind>,
    pub image: Option<String>,
    pub min_amount: Option<i32>,
    pub max_amount: Option<i32>,
    pub fee: Option<i32>,
    pub fee_type: Option<FeeType>,
    pub status: Option<MethodStatus>,
}

impl MethodPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.kind.is_none()
            && self.image.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.fee.is_none()
            && self.fee_type.is_none()
            && self.status.is_none()
    }
}
