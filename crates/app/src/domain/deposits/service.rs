//! Deposits service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        deposits::{
            data::NewDeposit,
            errors::DepositsServiceError,
            records::{DepositRecord, DepositStatus, DepositUuid},
            repository::{DepositRow, PgDepositsRepository},
        },
        methods::{MethodsService, MethodsServiceError, records::MethodStatus},
    },
    ids::OrderIdGenerator,
    integrations::duitku::{CreatePayment, PaymentGateway},
};

pub struct PgDepositsService {
    db: Db,
    repository: PgDepositsRepository,
    methods: Arc<dyn MethodsService>,
    payments: Arc<dyn PaymentGateway>,
    ids: Arc<OrderIdGenerator>,
}

impl std::fmt::Debug for PgDepositsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgDepositsService")
            .field("db", &self.db)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl PgDepositsService {
    #[must_use]
    pub fn new(
        db: Db,
        methods: Arc<dyn MethodsService>,
        payments: Arc<dyn PaymentGateway>,
        ids: Arc<OrderIdGenerator>,
    ) -> Self {
        Self {
            db,
            repository: PgDepositsRepository::new(),
            methods,
            payments,
            ids,
        }
    }
}

#[async_trait]
impl DepositsService for PgDepositsService {
    async fn create_deposit(
        &self,
        deposit: NewDeposit,
    ) -> Result<DepositRecord, DepositsServiceError> {
        if deposit.amount == 0 {
            return Err(DepositsServiceError::InvalidData);
        }

        let amount = i32::try_from(deposit.amount)?;

        let method = self
            .methods
            .get_method(&deposit.method)
            .await
            .map_err(|error| match error {
                MethodsServiceError::NotFound => {
                    DepositsServiceError::UnknownMethod(deposit.method.clone())
                }
                other => DepositsServiceError::Method(other),
            })?;

        if method.status != MethodStatus::Active {
            return Err(DepositsServiceError::MethodUnavailable(method.code));
        }

        if !method.accepts(i64::from(amount)) {
            return Err(DepositsServiceError::AmountOutOfRange {
                min: method.min_amount,
                max: method.max_amount,
            });
        }

        let order_id = self.ids.next_id();

        let payment = self
            .payments
            .create_transaction(CreatePayment {
                amount: i64::from(amount),
                method: deposit.method.clone(),
                order_id: order_id.clone(),
                product_details: format!("Deposit {amount}"),
            })
            .await?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_deposit(
                &mut tx,
                &DepositRow {
                    uuid: DepositUuid::new(),
                    order_id: &order_id,
                    username: &deposit.username,
                    method: &deposit.method,
                    payment_reference: Some(&payment.reference),
                    payment_url: payment.payment_url.as_deref(),
                    destination_number: &deposit.destination_number,
                    amount,
                    status: DepositStatus::Pending,
                },
            )
            .await?;

        tx.commit().await?;

        info!(order_id = %created.order_id, amount, "deposit created");

        Ok(created)
    }

    async fn list_deposits(&self) -> Result<Vec<DepositRecord>, DepositsServiceError> {
        let mut tx = self.db.begin().await?;

        let deposits = self.repository.list_deposits(&mut tx).await?;

        tx.commit().await?;

        Ok(deposits)
    }
}

#[automock]
#[async_trait]
pub trait DepositsService: Send + Sync {
    /// Opens a payment for the deposit and stores it as pending.
    ///
    /// The method must exist, be active and accept the amount. Nothing is
    /// stored when the payment gateway refuses.
    async fn create_deposit(
        &self,
        deposit: NewDeposit,
    ) -> Result<DepositRecord, DepositsServiceError>;

    /// Retrieves all deposits, newest first.
    async fn list_deposits(&self) -> Result<Vec<DepositRecord>, DepositsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::methods::{MethodsService, data::MethodPatch},
        integrations::duitku::{MockPaymentGateway, PaymentError, PaymentReference},
        test::{TestContext, helpers::insert_method},
    };

    use super::*;

    fn service(ctx: &TestContext, payments: MockPaymentGateway) -> PgDepositsService {
        PgDepositsService::new(
            Db::new(ctx.db.pool().clone()),
            Arc::new(ctx.methods.clone()),
            Arc::new(payments),
            Arc::new(OrderIdGenerator::new("DEP")),
        )
    }

    fn new_deposit(amount: u64) -> NewDeposit {
        NewDeposit {
            username: "budi".to_string(),
            method: "BC".to_string(),
            amount,
            destination_number: "081234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn create_deposit_stores_pending_payment() -> TestResult {
        let ctx = TestContext::new().await;
        insert_method(&ctx, "BC", 10_000, 5_000_000).await?;
        let mut payments = MockPaymentGateway::new();

        payments
            .expect_create_transaction()
            .withf(|payment| {
                payment.amount == 50_000 && payment.method == "BC" && payment.order_id.starts_with("DEP")
            })
            .times(1)
            .returning(|_| {
                Ok(PaymentReference {
                    reference: "D0001ABC".to_string(),
                    payment_url: Some("https://pay.example/D0001ABC".to_string()),
                    va_number: None,
                    qr_string: None,
                })
            });

        let deposit = service(&ctx, payments)
            .create_deposit(new_deposit(50_000))
            .await?;

        assert_eq!(deposit.status, DepositStatus::Pending);
        assert_eq!(deposit.amount, 50_000);
        assert_eq!(deposit.payment_reference.as_deref(), Some("D0001ABC"));
        assert!(deposit.order_id.starts_with("DEP"));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_payment_stores_nothing() -> TestResult {
        let ctx = TestContext::new().await;
        insert_method(&ctx, "BC", 10_000, 5_000_000).await?;
        let mut payments = MockPaymentGateway::new();

        payments.expect_create_transaction().times(1).returning(|_| {
            Err(PaymentError::Rejected {
                code: "01".to_string(),
                message: "Payment channel not available".to_string(),
            })
        });

        let service = service(&ctx, payments);
        let result = service.create_deposit(new_deposit(50_000)).await;

        assert!(
            matches!(result, Err(DepositsServiceError::Payment(_))),
            "expected Payment error, got {result:?}"
        );
        assert!(service.list_deposits().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn zero_amount_is_rejected_before_payment() {
        let ctx = TestContext::new().await;
        let mut payments = MockPaymentGateway::new();

        payments.expect_create_transaction().never();

        let result = service(&ctx, payments).create_deposit(new_deposit(0)).await;

        assert!(
            matches!(result, Err(DepositsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn oversized_amount_is_rejected_before_payment() {
        let ctx = TestContext::new().await;
        let mut payments = MockPaymentGateway::new();

        payments.expect_create_transaction().never();

        let result = service(&ctx, payments)
            .create_deposit(new_deposit(3_000_000_000))
            .await;

        assert!(
            matches!(result, Err(DepositsServiceError::InvalidAmount(_))),
            "expected InvalidAmount, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unknown_method_is_rejected_before_payment() {
        let ctx = TestContext::new().await;
        let mut payments = MockPaymentGateway::new();

        payments.expect_create_transaction().never();

        let result = service(&ctx, payments)
            .create_deposit(new_deposit(50_000))
            .await;

        assert!(
            matches!(&result, Err(DepositsServiceError::UnknownMethod(code)) if code == "BC"),
            "expected UnknownMethod, got {result:?}"
        );
    }

    #[tokio::test]
    async fn inactive_method_is_rejected_before_payment() -> TestResult {
        let ctx = TestContext::new().await;
        insert_method(&ctx, "BC", 10_000, 5_000_000).await?;
        ctx.methods
            .update_method(
                "BC",
                MethodPatch {
                    status: Some(MethodStatus::Inactive),
                    ..MethodPatch::default()
                },
            )
            .await?;

        let mut payments = MockPaymentGateway::new();
        payments.expect_create_transaction().never();

        let result = service(&ctx, payments)
            .create_deposit(new_deposit(50_000))
            .await;

        assert!(
            matches!(result, Err(DepositsServiceError::MethodUnavailable(_))),
            "expected MethodUnavailable, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn amount_outside_method_bounds_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        insert_method(&ctx, "BC", 10_000, 5_000_000).await?;

        let mut payments = MockPaymentGateway::new();
        payments.expect_create_transaction().never();

        let service = service(&ctx, payments);
        let below = service.create_deposit(new_deposit(9_999)).await;
        let above = service.create_deposit(new_deposit(5_000_001)).await;

        for result in [below, above] {
            assert!(
                matches!(
                    result,
                    Err(DepositsServiceError::AmountOutOfRange {
                        min: 10_000,
                        max: 5_000_000,
                    })
                ),
                "expected AmountOutOfRange, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn list_deposits_returns_newest_first() -> TestResult {
        let ctx = TestContext::new().await;
        insert_method(&ctx, "BC", 10_000, 5_000_000).await?;
        let mut payments = MockPaymentGateway::new();

        payments.expect_create_transaction().times(2).returning(|payment| {
            Ok(PaymentReference {
                reference: format!("REF-{}", payment.order_id),
                payment_url: None,
                va_number: None,
                qr_string: None,
            })
        });

        let service = service(&ctx, payments);
        let first = service.create_deposit(new_deposit(10_000)).await?;
        let second = service.create_deposit(new_deposit(20_000)).await?;

        let deposits = service.list_deposits().await?;

        assert_eq!(deposits.len(), 2);
        assert_eq!(deposits[0].uuid, second.uuid);
        assert_eq!(deposits[1].uuid, first.uuid);
        assert_ne!(first.order_id, second.order_id);

        Ok(())
    }
}
