//! Deposits Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::deposits::records::{DepositRecord, DepositStatus, DepositUuid};

const CREATE_DEPOSIT_SQL: &str = include_str!("sql/create_deposit.sql");
const LIST_DEPOSITS_SQL: &str = include_str!("sql/list_deposits.sql");

/// Columns for a deposit row about to be stored.
#[derive(Debug)]
pub(crate) struct DepositRow<'a> {
    pub uuid: DepositUuid,
    pub order_id: &'a str,
    pub username: &'a str,
    pub method: &'a str,
    pub payment_reference: Option<&'a str>,
    pub payment_url: Option<&'a str>,
    pub destination_number: &'a str,
    pub amount: i32,
    pub status: DepositStatus,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDepositsRepository;

impl PgDepositsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_deposit(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        deposit: &DepositRow<'_>,
    ) -> Result<DepositRecord, sqlx::Error> {
        query_as::<Postgres, DepositRecord>(CREATE_DEPOSIT_SQL)
            .bind(deposit.uuid.into_uuid())
            .bind(deposit.order_id)
            .bind(deposit.username)
            .bind(deposit.method)
            .bind(deposit.payment_reference)
            .bind(deposit.payment_url)
            .bind(deposit.destination_number)
            .bind(deposit.amount)
            .bind(deposit.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_deposits(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<DepositRecord>, sqlx::Error> {
        query_as::<Postgres, DepositRecord>(LIST_DEPOSITS_SQL)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for DepositRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let amount_i32: i32 = row.try_get("amount")?;

        let amount = u32::try_from(amount_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "amount".to_string(),
            source: Box::new(e),
        })?;

        let status: String = row.try_get("status")?;

        let status = status
            .parse::<DepositStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: DepositUuid::from_uuid(row.try_get("uuid")?),
            order_id: row.try_get("order_id")?,
            username: row.try_get("username")?,
            method: row.try_get("method")?,
            payment_reference: row.try_get("payment_reference")?,
            payment_url: row.try_get("payment_url")?,
            destination_number: row.try_get("destination_number")?,
            amount,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
