//! Payment Methods Repository

use std::str::FromStr;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::methods::{
    data::{MethodPatch, NewMethod},
    records::{FeeType, MethodKind, MethodRecord, MethodStatus, MethodUuid, UnknownVariant},
};

const LIST_METHODS_SQL: &str = include_str!("sql/list_methods.sql");
const GET_METHOD_SQL: &str = include_str!("sql/get_method.sql");
const CREATE_METHOD_SQL: &str = include_str!("sql/create_method.sql");
const UPDATE_METHOD_SQL: &str = include_str!("sql/update_method.sql");
const DELETE_METHOD_SQL: &str = include_str!("sql/delete_method.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgMethodsRepository;

impl PgMethodsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_methods(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        kind: Option<MethodKind>,
    ) -> Result<Vec<MethodRecord>, sqlx::Error> {
        query_as::<Postgres, MethodRecord>(LIST_METHODS_SQL)
            .bind(kind.map(MethodKind::as_str))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_method(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<MethodRecord, sqlx::Error> {
        query_as::<Postgres, MethodRecord>(GET_METHOD_SQL)
            .bind(code)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_method(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        method: &NewMethod,
    ) -> Result<MethodRecord, sqlx::Error> {
        query_as::<Postgres, MethodRecord>(CREATE_METHOD_SQL)
            .bind(method.uuid.into_uuid())
            .bind(&method.code)
            .bind(&method.name)
            .bind(&method.description)
            .bind(method.kind.as_str())
            .bind(&method.image)
            .bind(method.min_amount)
            .bind(method.max_amount)
            .bind(method.fee)
            .bind(method.fee_type.map(FeeType::as_str))
            .bind(method.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    /// Apply `patch` in one statement; absent fields keep their stored value.
    pub(crate) async fn update_method(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
        patch: &MethodPatch,
    ) -> Result<MethodRecord, sqlx::Error> {
        query_as::<Postgres, MethodRecord>(UPDATE_METHOD_SQL)
            .bind(code)
            .bind(patch.name.as_deref())
            .bind(patch.description.as_deref())
            .bind(patch.kind.map(MethodKind::as_str))
            .bind(patch.image.as_deref())
            .bind(patch.min_amount)
            .bind(patch.max_amount)
            .bind(patch.fee)
            .bind(patch.fee_type.map(FeeType::as_str))
            .bind(patch.status.map(MethodStatus::as_str))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_method(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        code: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_METHOD_SQL)
            .bind(code)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn parse_column<T>(column: &str, value: &str) -> sqlx::Result<T>
where
    T: FromStr<Err = UnknownVariant>,
{
    value.parse::<T>().map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for MethodRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("kind")?;
        let status: String = row.try_get("status")?;
        let fee_type: Option<String> = row.try_get("fee_type")?;

        Ok(Self {
            uuid: MethodUuid::from_uuid(row.try_get("uuid")?),
            code: row.try_get("code")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            kind: parse_column("kind", &kind)?,
            image: row.try_get("image")?,
            min_amount: row.try_get("min_amount")?,
            max_amount: row.try_get("max_amount")?,
            fee: row.try_get("fee")?,
            fee_type: fee_type
                .as_deref()
                .map(|value| parse_column("fee_type", value))
                .transpose()?,
            status: parse_column("status", &status)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
