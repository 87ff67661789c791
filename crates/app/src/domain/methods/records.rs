//! Payment Method Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Payment method UUID
pub type MethodUuid = TypedUuid<MethodRecord>;

/// A stored value that names no known variant.
#[derive(Debug, Error)]
#[error("unknown {field} {value:?}")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}

/// Payment channel family, as the aggregator groups them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    EWallet,
    Qris,
    VirtualAccount,
    ConvenienceStore,
}

impl MethodKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EWallet => "EWALLET",
            Self::Qris => "QRIS",
            Self::VirtualAccount => "VIRTUAL_ACCOUNT",
            Self::ConvenienceStore => "CS_STORE",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MethodKind {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "EWALLET" => Ok(Self::EWallet),
            "QRIS" => Ok(Self::Qris),
            "VIRTUAL_ACCOUNT" => Ok(Self::VirtualAccount),
            "CS_STORE" => Ok(Self::ConvenienceStore),
            other => Err(UnknownVariant {
                field: "method kind",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeType {
    Fixed,
    Percentage,
}

impl FeeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "FIXED",
            Self::Percentage => "PERCENTAGE",
        }
    }
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeeType {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "FIXED" => Ok(Self::Fixed),
            "PERCENTAGE" => Ok(Self::Percentage),
            other => Err(UnknownVariant {
                field: "fee type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodStatus {
    #[default]
    Active,
    Inactive,
}

impl MethodStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for MethodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MethodStatus {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(UnknownVariant {
                field: "method status",
                value: other.to_string(),
            }),
        }
    }
}

/// Payment Method Record
#[derive(Debug, Clone)]
pub struct MethodRecord {
    pub uuid: MethodUuid,

    /// Aggregator payment method code, e.g. `BC` or `OV`.
    pub code: String,

    pub name: String,
    pub description: String,
    pub kind: MethodKind,
    pub image: String,

    /// Inclusive bounds on a single payment.
    pub min_amount: i32,
    pub max_amount: i32,

    pub fee: Option<i32>,
    pub fee_type: Option<FeeType>,
    pub status: MethodStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MethodRecord {
    /// Whether a payment of `amount` fits this method's bounds.
    #[must_use]
    pub fn accepts(&self, amount: i64) -> bool {
        (i64::from(self.min_amount)..=i64::from(self.max_amount)).contains(&amount)
    }
}
