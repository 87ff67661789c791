//! Digiflazz wire models.

use serde::{Deserialize, Serialize};

/// One sellable item from the provider's price list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProviderSku {
    #[serde(rename = "buyer_sku_code")]
    pub sku_code: String,

    #[serde(rename = "product_name")]
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub brand: String,

    #[serde(rename = "type", default)]
    pub item_type: String,

    #[serde(rename = "desc", default)]
    pub description: String,

    #[serde(default)]
    pub seller_name: String,

    /// Cost in the smallest currency unit.
    #[serde(rename = "price")]
    pub cost_price: i64,

    #[serde(default)]
    pub stock: i64,

    #[serde(rename = "unlimited_stock", default)]
    pub unlimited_stock: bool,

    #[serde(rename = "buyer_product_status")]
    pub buyer_enabled: bool,

    #[serde(rename = "seller_product_status")]
    pub seller_enabled: bool,

    #[serde(default)]
    pub start_cut_off: String,

    #[serde(default)]
    pub end_cut_off: String,

    #[serde(rename = "multi", default)]
    pub supports_multi: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct PriceListRequest<'a> {
    pub cmd: &'a str,
    pub username: &'a str,
    pub sign: String,
}

/// Failure envelope body: `{"data": {"rc": "..", "message": ".."}}`.
#[derive(Debug, Deserialize)]
pub(super) struct ProviderFailure {
    #[serde(default)]
    pub rc: String,
    #[serde(default)]
    pub message: String,
}

/// Transactional top-up request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopUpRequest {
    pub sku_code: String,
    pub customer_no: String,
    pub ref_id: String,
    pub callback_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct TopUpPayload<'a> {
    pub username: &'a str,
    pub buyer_sku_code: &'a str,
    pub customer_no: &'a str,
    pub ref_id: &'a str,
    pub sign: String,
    #[serde(rename = "cb_url", skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopUpStatus {
    #[serde(rename = "Sukses")]
    Success,
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Gagal")]
    Failed,
}

/// Provider answer to a top-up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopUpResponse {
    pub ref_id: String,
    #[serde(default)]
    pub customer_no: String,
    #[serde(rename = "buyer_sku_code", default)]
    pub sku_code: String,
    #[serde(default)]
    pub message: String,
    pub status: TopUpStatus,
    #[serde(default)]
    pub rc: String,
    #[serde(rename = "sn", default)]
    pub serial_number: String,
    #[serde(rename = "buyer_last_saldo", default)]
    pub buyer_last_balance: i64,
    #[serde(default)]
    pub price: i64,
}
