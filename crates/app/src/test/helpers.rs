//! Test Helpers

use sqlx::query;

use crate::{
    domain::{
        categories::records::CategoryUuid,
        methods::{
            MethodsService, MethodsServiceError,
            data::NewMethod,
            records::{MethodKind, MethodRecord, MethodStatus, MethodUuid},
        },
    },
    integrations::digiflazz::RawProviderSku,
    test::TestContext,
};

/// Insert a category row directly; categories are reference data with no
/// write path of their own.
pub(crate) async fn insert_category(
    ctx: &TestContext,
    name: &str,
    brand: &str,
) -> Result<CategoryUuid, sqlx::Error> {
    let uuid = CategoryUuid::new();

    // Consecutive inserts in one test must sort by creation.
    query(
        "INSERT INTO categories (uuid, name, brand, code, created_at) \
         VALUES ($1, $2, $3, $4, clock_timestamp())",
    )
    .bind(uuid.into_uuid())
    .bind(name)
    .bind(brand)
    .bind(uuid.to_string())
    .execute(ctx.db.pool())
    .await?;

    Ok(uuid)
}

/// Store an active virtual-account method accepting `min..=max`.
pub(crate) async fn insert_method(
    ctx: &TestContext,
    code: &str,
    min_amount: i32,
    max_amount: i32,
) -> Result<MethodRecord, MethodsServiceError> {
    ctx.methods
        .create_method(NewMethod {
            uuid: MethodUuid::new(),
            code: code.to_string(),
            name: format!("{code} Virtual Account"),
            description: String::new(),
            kind: MethodKind::VirtualAccount,
            image: String::new(),
            min_amount,
            max_amount,
            fee: None,
            fee_type: None,
            status: MethodStatus::Active,
        })
        .await
}

/// An enabled, in-stock SKU named `"Reload 10000 {code}"`.
pub(crate) fn raw_sku(code: &str, cost: i64) -> RawProviderSku {
    RawProviderSku {
        sku_code: code.to_string(),
        name: format!("Reload 10000 {code}"),
        category: "Pulsa".to_string(),
        brand: "TELKOMSEL".to_string(),
        item_type: "Umum".to_string(),
        description: String::new(),
        seller_name: "Seller".to_string(),
        cost_price: cost,
        stock: 10,
        unlimited_stock: false,
        buyer_enabled: true,
        seller_enabled: true,
        start_cut_off: "0:0".to_string(),
        end_cut_off: "0:0".to_string(),
        supports_multi: true,
    }
}
