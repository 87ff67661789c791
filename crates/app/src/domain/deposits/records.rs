//! Deposit Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Deposit UUID
pub type DepositUuid = TypedUuid<DepositRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositStatus {
    Pending,
    Paid,
    Failed,
}

impl DepositStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for DepositStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown deposit status {0:?}")]
pub struct UnknownDepositStatus(pub String);

impl FromStr for DepositStatus {
    type Err = UnknownDepositStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            other => Err(UnknownDepositStatus(other.to_string())),
        }
    }
}

/// Deposit Record
#[derive(Debug, Clone)]
pub struct DepositRecord {
    pub uuid: DepositUuid,

    /// Merchant order id sent to the payment aggregator.
    pub order_id: String,

    pub username: String,
    pub method: String,
    pub payment_reference: Option<String>,
    pub payment_url: Option<String>,
    pub destination_number: String,

    /// Amount in the smallest currency unit.
    pub amount: u32,

    pub status: DepositStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
