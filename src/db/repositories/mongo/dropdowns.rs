//! Read-only dropdown projections over the reference collections.

use async_trait::async_trait;

use super::{MongoCatalog, MongoEntityRepository};
use crate::db::entity::CatalogEntity;
use crate::db::repository::{DropdownRepository, EntityRepository, RepositoryResult};
use crate::models::{Author, Category, Country, DropdownItem, Publisher};

/// MongoDB-backed dropdown repository.
///
/// Each option list reuses the generic name-sorted fetch, so labels come
/// back already ordered and only the `(value, label)` projection happens
/// here.
#[derive(Debug, Clone)]
pub struct MongoDropdownRepository {
    countries: MongoEntityRepository<Country>,
    authors: MongoEntityRepository<Author>,
    publishers: MongoEntityRepository<Publisher>,
    categories: MongoEntityRepository<Category>,
}

impl MongoDropdownRepository {
    pub(super) fn new(store: &MongoCatalog) -> Self {
        Self {
            countries: store.entity_repository::<Country>(),
            authors: store.entity_repository::<Author>(),
            publishers: store.entity_repository::<Publisher>(),
            categories: store.entity_repository::<Category>(),
        }
    }

    async fn options_of<T: CatalogEntity>(
        repo: &MongoEntityRepository<T>,
    ) -> RepositoryResult<Vec<DropdownItem>> {
        let rows = repo.get_all().await?;
        Ok(rows
            .iter()
            .map(|row| DropdownItem::new(row.entity_id().to_string(), row.display_name()))
            .collect())
    }
}

#[async_trait]
impl DropdownRepository for MongoDropdownRepository {
    async fn country_options(&self) -> RepositoryResult<Vec<DropdownItem>> {
        Self::options_of(&self.countries).await
    }

    async fn author_options(&self) -> RepositoryResult<Vec<DropdownItem>> {
        Self::options_of(&self.authors).await
    }

    async fn publisher_options(&self) -> RepositoryResult<Vec<DropdownItem>> {
        Self::options_of(&self.publishers).await
    }

    async fn category_options(&self) -> RepositoryResult<Vec<DropdownItem>> {
        Self::options_of(&self.categories).await
    }
}
