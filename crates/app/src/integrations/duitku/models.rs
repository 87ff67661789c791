//! Duitku wire models.

use serde::{Deserialize, Serialize};

/// A payment to open with the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePayment {
    /// Amount in the smallest currency unit.
    pub amount: i64,

    /// Aggregator payment method code, e.g. `"BC"` or `"SP"`.
    pub method: String,

    /// Merchant order id.
    pub order_id: String,

    pub product_details: String,
}

/// What the aggregator hands back for an opened payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReference {
    pub reference: String,
    pub payment_url: Option<String>,
    pub va_number: Option<String>,
    pub qr_string: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct InquiryRequest<'a> {
    pub merchant_code: &'a str,
    pub payment_amount: i64,
    pub merchant_order_id: &'a str,
    pub product_details: &'a str,
    pub payment_method: &'a str,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct InquiryResponse {
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub payment_url: String,
    #[serde(default)]
    pub va_number: String,
    #[serde(default)]
    pub qr_string: String,
    #[serde(default)]
    pub status_code: String,
    #[serde(default)]
    pub status_message: String,
}
