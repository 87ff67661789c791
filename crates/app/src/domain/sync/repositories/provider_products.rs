//! Provider Products Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::sync::{
    models::MappedCandidate,
    records::{
        ProductUuid, ProviderProductRecord, ProviderProductUuid, ProviderRecord, ProviderUuid,
    },
};

const FIND_PROVIDER_SQL: &str = include_str!("../sql/find_provider.sql");
const FIND_PROVIDER_PRODUCT_SQL: &str = include_str!("../sql/find_provider_product.sql");
const INSERT_PROVIDER_PRODUCT_SQL: &str = include_str!("../sql/insert_provider_product.sql");
const UPDATE_PROVIDER_PRODUCT_SQL: &str = include_str!("../sql/update_provider_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProviderProductsRepository;

impl PgProviderProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_provider(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<Option<ProviderRecord>, sqlx::Error> {
        query_as::<Postgres, ProviderRecord>(FIND_PROVIDER_SQL)
            .bind(slug)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Look up the row for (`provider`, `sku_code`), locking it for the rest
    /// of the transaction.
    pub(crate) async fn find_provider_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderUuid,
        sku_code: &str,
    ) -> Result<Option<ProviderProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProviderProductRecord>(FIND_PROVIDER_PRODUCT_SQL)
            .bind(provider.into_uuid())
            .bind(sku_code)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn insert_provider_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider: ProviderUuid,
        product: ProductUuid,
        candidate: &MappedCandidate,
    ) -> Result<ProviderProductUuid, sqlx::Error> {
        let uuid = ProviderProductUuid::new();

        query(INSERT_PROVIDER_PRODUCT_SQL)
            .bind(uuid.into_uuid())
            .bind(provider.into_uuid())
            .bind(product.into_uuid())
            .bind(&candidate.sku_code)
            .bind(&candidate.name)
            .bind(candidate.cost_price)
            .bind(candidate.selling_price)
            .bind(candidate.profit_margin)
            .bind(candidate.stock)
            .bind(candidate.status.as_str())
            .bind(candidate.available)
            .execute(&mut **tx)
            .await?;

        Ok(uuid)
    }

    pub(crate) async fn update_provider_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        provider_product: ProviderProductUuid,
        product: ProductUuid,
        candidate: &MappedCandidate,
    ) -> Result<(), sqlx::Error> {
        query(UPDATE_PROVIDER_PRODUCT_SQL)
            .bind(provider_product.into_uuid())
            .bind(product.into_uuid())
            .bind(&candidate.name)
            .bind(candidate.cost_price)
            .bind(candidate.selling_price)
            .bind(candidate.profit_margin)
            .bind(candidate.stock)
            .bind(candidate.status.as_str())
            .bind(candidate.available)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for ProviderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProviderUuid::from_uuid(row.try_get("uuid")?),
            slug: row.try_get("slug")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for ProviderProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProviderProductUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: row
                .try_get::<Option<uuid::Uuid>, _>("product_uuid")?
                .map(ProductUuid::from_uuid),
        })
    }
}
