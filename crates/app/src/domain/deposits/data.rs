//! Deposit Data

/// New Deposit Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeposit {
    pub username: String,

    /// Code of a stored payment method.
    pub method: String,

    pub amount: u64,
    pub destination_number: String,
}
