//! Categories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::categories::records::{CategoryRecord, CategoryUuid};

const FIND_CATEGORY_BY_BRAND_SQL: &str = include_str!("sql/find_category_by_brand.sql");
const FIND_CATEGORY_BY_NAME_SQL: &str = include_str!("sql/find_category_by_name.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCategoriesRepository;

impl PgCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_brand(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brand: &str,
    ) -> Result<Option<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(FIND_CATEGORY_BY_BRAND_SQL)
            .bind(brand)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_by_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(FIND_CATEGORY_BY_NAME_SQL)
            .bind(name)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(LIST_CATEGORIES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(GET_CATEGORY_SQL)
            .bind(category.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CategoryUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            sub_name: row.try_get("sub_name")?,
            brand: row.try_get("brand")?,
            code: row.try_get("code")?,
            status: row.try_get("status")?,
            thumbnail: row.try_get("thumbnail")?,
            banner: row.try_get("banner")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
