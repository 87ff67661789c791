//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        categories::{
            errors::CategoriesServiceError,
            records::{CategoryRecord, CategoryUuid},
            repository::PgCategoriesRepository,
        },
        sub_categories::records::SubCategoryUuid,
    },
};

/// Outcome of resolving a provider's free-text category and brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub category: CategoryUuid,
    pub sub_category: SubCategoryResolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubCategoryResolution {
    Resolved(SubCategoryUuid),
    Unresolved,
}

impl SubCategoryResolution {
    #[must_use]
    pub fn uuid(self) -> Option<SubCategoryUuid> {
        match self {
            Self::Resolved(uuid) => Some(uuid),
            Self::Unresolved => None,
        }
    }
}

/// Pick the sub-category for a provider item within `category`.
///
/// There is no rule tying provider items to sub-categories yet, so every
/// item stays unresolved and its product carries no sub-category.
#[must_use]
pub fn resolve_sub_category(_category: &CategoryRecord, _item_type: &str) -> SubCategoryResolution {
    SubCategoryResolution::Unresolved
}

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn resolve_category(
        &self,
        category: &str,
        brand: &str,
        item_type: &str,
    ) -> Result<Resolution, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let found = match self.repository.find_by_brand(&mut tx, brand).await? {
            Some(record) => Some(record),
            None => self.repository.find_by_name(&mut tx, category).await?,
        };

        tx.commit().await?;

        let Some(record) = found else {
            return Err(CategoriesServiceError::CategoryNotFound {
                category: category.to_string(),
                brand: brand.to_string(),
            });
        };

        debug!(brand, category, resolved = %record.uuid, "resolved category");

        Ok(Resolution {
            category: record.uuid,
            sub_category: resolve_sub_category(&record, item_type),
        })
    }

    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Match a category by brand, falling back to the category name. Both
    /// comparisons are case-insensitive and exact; the oldest match wins.
    async fn resolve_category(
        &self,
        category: &str,
        brand: &str,
        item_type: &str,
    ) -> Result<Resolution, CategoriesServiceError>;

    /// Retrieves every category ordered by name.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError>;
}
