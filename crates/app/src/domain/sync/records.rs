//! Sync Records

use crate::{
    domain::{categories::records::CategoryUuid, sub_categories::records::SubCategoryUuid},
    uuids::TypedUuid,
};

/// Provider UUID
pub type ProviderUuid = TypedUuid<ProviderRecord>;

/// Provider Product UUID
pub type ProviderProductUuid = TypedUuid<ProviderProductRecord>;

/// Catalog Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Provider Record
#[derive(Debug, Clone)]
pub struct ProviderRecord {
    pub uuid: ProviderUuid,
    pub slug: String,
}

/// The part of a provider-product row reconciliation branches on.
#[derive(Debug, Clone)]
pub struct ProviderProductRecord {
    pub uuid: ProviderProductUuid,
    pub product_uuid: Option<ProductUuid>,
}

/// Catalog Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub category_uuid: CategoryUuid,
    pub sub_category_uuid: Option<SubCategoryUuid>,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub original_price: i32,
    pub denomination: String,
    pub denomination_type: String,
    pub sort_order: i32,
    pub status: String,
    pub stock: i32,
}
