//! Sub-categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        categories::records::CategoryUuid,
        sub_categories::{
            data::{NewSubCategory, SubCategoryPatch},
            errors::SubCategoriesServiceError,
            records::{SubCategoryRecord, SubCategoryUuid},
            repository::PgSubCategoriesRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgSubCategoriesService {
    db: Db,
    repository: PgSubCategoriesRepository,
}

impl PgSubCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSubCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl SubCategoriesService for PgSubCategoriesService {
    async fn list_sub_categories(
        &self,
        category: Option<CategoryUuid>,
    ) -> Result<Vec<SubCategoryRecord>, SubCategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let sub_categories = self
            .repository
            .list_sub_categories(&mut tx, category)
            .await?;

        tx.commit().await?;

        Ok(sub_categories)
    }

    async fn get_sub_category(
        &self,
        sub_category: SubCategoryUuid,
    ) -> Result<SubCategoryRecord, SubCategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .get_sub_category(&mut tx, sub_category)
            .await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn create_sub_category(
        &self,
        sub_category: NewSubCategory,
    ) -> Result<SubCategoryRecord, SubCategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_sub_category(&mut tx, &sub_category)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_sub_category(
        &self,
        sub_category: SubCategoryUuid,
        patch: SubCategoryPatch,
    ) -> Result<SubCategoryRecord, SubCategoriesServiceError> {
        if patch.is_empty() {
            return self.get_sub_category(sub_category).await;
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_sub_category(&mut tx, sub_category, &patch)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_sub_category(
        &self,
        sub_category: SubCategoryUuid,
    ) -> Result<(), SubCategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_sub_category(&mut tx, sub_category)
            .await?;

        if rows_affected == 0 {
            return Err(SubCategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait SubCategoriesService: Send + Sync {
    /// Retrieves sub-categories, optionally only those of one category.
    async fn list_sub_categories(
        &self,
        category: Option<CategoryUuid>,
    ) -> Result<Vec<SubCategoryRecord>, SubCategoriesServiceError>;

    /// Retrieve a single sub-category.
    async fn get_sub_category(
        &self,
        sub_category: SubCategoryUuid,
    ) -> Result<SubCategoryRecord, SubCategoriesServiceError>;

    async fn create_sub_category(
        &self,
        sub_category: NewSubCategory,
    ) -> Result<SubCategoryRecord, SubCategoriesServiceError>;

    /// Applies the fields present in `patch`.
    async fn update_sub_category(
        &self,
        sub_category: SubCategoryUuid,
        patch: SubCategoryPatch,
    ) -> Result<SubCategoryRecord, SubCategoriesServiceError>;

    async fn delete_sub_category(
        &self,
        sub_category: SubCategoryUuid,
    ) -> Result<(), SubCategoriesServiceError>;
}
