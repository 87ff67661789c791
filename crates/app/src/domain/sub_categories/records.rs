//! Sub-category Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::{domain::categories::records::CategoryUuid, uuids::TypedUuid};

/// Sub-category UUID
pub type SubCategoryUuid = TypedUuid<SubCategoryRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubCategoryStatus {
    #[default]
    Active,
    Inactive,
}

impl SubCategoryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for SubCategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown sub-category status {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for SubCategoryStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Sub-category Record
#[derive(Debug, Clone)]
pub struct SubCategoryRecord {
    pub uuid: SubCategoryUuid,
    pub category_uuid: CategoryUuid,
    pub code: String,
    pub name: String,
    pub status: SubCategoryStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
