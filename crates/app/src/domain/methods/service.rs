//! Payment methods service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::methods::{
        data::{MethodPatch, NewMethod},
        errors::MethodsServiceError,
        records::{MethodKind, MethodRecord},
        repository::PgMethodsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgMethodsService {
    db: Db,
    repository: PgMethodsRepository,
}

impl PgMethodsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgMethodsRepository::new(),
        }
    }
}

#[async_trait]
impl MethodsService for PgMethodsService {
    async fn list_methods(
        &self,
        kind: Option<MethodKind>,
    ) -> Result<Vec<MethodRecord>, MethodsServiceError> {
        let mut tx = self.db.begin().await?;

        let methods = self.repository.list_methods(&mut tx, kind).await?;

        tx.commit().await?;

        Ok(methods)
    }

    async fn get_method(&self, code: &str) -> Result<MethodRecord, MethodsServiceError> {
        let mut tx = self.db.begin().await?;

        let method = self.repository.get_method(&mut tx, code).await?;

        tx.commit().await?;

        Ok(method)
    }

    async fn create_method(&self, method: NewMethod) -> Result<MethodRecord, MethodsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_method(&mut tx, &method).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_method(
        &self,
        code: &str,
        patch: MethodPatch,
    ) -> Result<MethodRecord, MethodsServiceError> {
        if patch.is_empty() {
            return self.get_method(code).await;
        }

        let mut tx = self.db.begin().await?;

        let updated = self.repository.update_method(&mut tx, code, &patch).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_method(&self, code: &str) -> Result<(), MethodsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_method(&mut tx, code).await?;

        if rows_affected == 0 {
            return Err(MethodsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait MethodsService: Send + Sync {
    /// Retrieves payment methods ordered by kind then name, optionally only
    /// one kind.
    async fn list_methods(
        &self,
        kind: Option<MethodKind>,
    ) -> Result<Vec<MethodRecord>, MethodsServiceError>;

    /// Retrieve a payment method by its aggregator code.
    async fn get_method(&self, code: &str) -> Result<MethodRecord, MethodsServiceError>;

    async fn create_method(&self, method: NewMethod) -> Result<MethodRecord, MethodsServiceError>;

    /// Applies the fields present in `patch`.
    async fn update_method(
        &self,
        code: &str,
        patch: MethodPatch,
    ) -> Result<MethodRecord, MethodsServiceError>;

    async fn delete_method(&self, code: &str) -> Result<(), MethodsServiceError>;
}
