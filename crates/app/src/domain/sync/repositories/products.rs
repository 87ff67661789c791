//! Catalog Products Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query};

use crate::domain::{
    categories::records::CategoryUuid,
    sub_categories::records::SubCategoryUuid,
    sync::{
        catalog::{denomination, denomination_type, sort_order},
        models::MappedCandidate,
        records::{ProductRecord, ProductUuid},
    },
};

const INSERT_PRODUCT_SQL: &str = include_str!("../sql/insert_product.sql");
const UPDATE_PRODUCT_PRICING_SQL: &str = include_str!("../sql/update_product_pricing.sql");
#[cfg(test)]
const GET_PRODUCT_SQL: &str = include_str!("../sql/get_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert a catalog product for a candidate whose category is resolved.
    pub(crate) async fn insert_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        candidate: &MappedCandidate,
        category: CategoryUuid,
    ) -> Result<ProductUuid, sqlx::Error> {
        let uuid = ProductUuid::new();

        query(INSERT_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .bind(category.into_uuid())
            .bind(candidate.sub_category.map(SubCategoryUuid::into_uuid))
            .bind(&candidate.name)
            .bind(&candidate.description)
            .bind(candidate.selling_price)
            .bind(candidate.cost_price)
            .bind(denomination(&candidate.name))
            .bind(denomination_type(&candidate.name).as_str())
            .bind(sort_order(candidate.selling_price))
            .bind(candidate.status.as_str())
            .bind(candidate.stock)
            .execute(&mut **tx)
            .await?;

        Ok(uuid)
    }

    /// Refresh price, original price, status and stock only. Returns the
    /// number of rows touched.
    pub(crate) async fn update_product_pricing(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        candidate: &MappedCandidate,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_PRODUCT_PRICING_SQL)
            .bind(product.into_uuid())
            .bind(candidate.selling_price)
            .bind(candidate.cost_price)
            .bind(candidate.status.as_str())
            .bind(candidate.stock)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    #[cfg(test)]
    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        sqlx::query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            category_uuid: CategoryUuid::from_uuid(row.try_get("category_uuid")?),
            sub_category_uuid: row
                .try_get::<Option<uuid::Uuid>, _>("sub_category_uuid")?
                .map(SubCategoryUuid::from_uuid),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            original_price: row.try_get("original_price")?,
            denomination: row.try_get("denomination")?,
            denomination_type: row.try_get("denomination_type")?,
            sort_order: row.try_get("sort_order")?,
            status: row.try_get("status")?,
            stock: row.try_get("stock")?,
        })
    }
}
