//! Sub-categories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    categories::records::CategoryUuid,
    sub_categories::{
        data::{NewSubCategory, SubCategoryPatch},
        records::{SubCategoryRecord, SubCategoryStatus, SubCategoryUuid},
    },
};

const LIST_SUB_CATEGORIES_SQL: &str = include_str!("sql/list_sub_categories.sql");
const GET_SUB_CATEGORY_SQL: &str = include_str!("sql/get_sub_category.sql");
const CREATE_SUB_CATEGORY_SQL: &str = include_str!("sql/create_sub_category.sql");
const UPDATE_SUB_CATEGORY_SQL: &str = include_str!("sql/update_sub_category.sql");
const DELETE_SUB_CATEGORY_SQL: &str = include_str!("sql/delete_sub_category.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubCategoriesRepository;

impl PgSubCategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_sub_categories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: Option<CategoryUuid>,
    ) -> Result<Vec<SubCategoryRecord>, sqlx::Error> {
        query_as::<Postgres, SubCategoryRecord>(LIST_SUB_CATEGORIES_SQL)
            .bind(category.map(CategoryUuid::into_uuid))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_sub_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sub_category: SubCategoryUuid,
    ) -> Result<SubCategoryRecord, sqlx::Error> {
        query_as::<Postgres, SubCategoryRecord>(GET_SUB_CATEGORY_SQL)
            .bind(sub_category.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_sub_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sub_category: &NewSubCategory,
    ) -> Result<SubCategoryRecord, sqlx::Error> {
        query_as::<Postgres, SubCategoryRecord>(CREATE_SUB_CATEGORY_SQL)
            .bind(sub_category.uuid.into_uuid())
            .bind(sub_category.category_uuid.into_uuid())
            .bind(&sub_category.code)
            .bind(&sub_category.name)
            .bind(sub_category.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Apply `patch` in one statement; absent fields keep their stored value.
    pub(crate) async fn update_sub_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sub_category: SubCategoryUuid,
        patch: &SubCategoryPatch,
    ) -> Result<SubCategoryRecord, sqlx::Error> {
        query_as::<Postgres, SubCategoryRecord>(UPDATE_SUB_CATEGORY_SQL)
            .bind(sub_category.into_uuid())
            .bind(patch.category_uuid.map(CategoryUuid::into_uuid))
            .bind(patch.code.as_deref())
            .bind(patch.name.as_deref())
            .bind(patch.status.map(SubCategoryStatus::as_str))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_sub_category(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        sub_category: SubCategoryUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SUB_CATEGORY_SQL)
            .bind(sub_category.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for SubCategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<SubCategoryStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: SubCategoryUuid::from_uuid(row.try_get("uuid")?),
            category_uuid: CategoryUuid::from_uuid(row.try_get("category_uuid")?),
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
