//! The assembled set of repository handles for one backend.

use std::sync::Arc;

use super::repository::{
    BookRepository, DropdownRepository, EntityRepository, HealthCheck, RepositoryResult,
};
use crate::models::{Author, Category, Country, Publisher};

/// One handle per repository interface, all backed by the same store.
///
/// A `Catalog` is what the factory hands out: consumers pick the handle
/// for the entity they work with and stay oblivious to the backend
/// behind it. Cloning is cheap and clones share backend state, so a
/// catalog can be stored once and cloned into every task that needs it.
#[derive(Clone)]
pub struct Catalog {
    pub books: Arc<dyn BookRepository>,
    pub authors: Arc<dyn EntityRepository<Author>>,
    pub categories: Arc<dyn EntityRepository<Category>>,
    pub publishers: Arc<dyn EntityRepository<Publisher>>,
    pub countries: Arc<dyn EntityRepository<Country>>,
    pub dropdowns: Arc<dyn DropdownRepository>,
    pub health: Arc<dyn HealthCheck>,
}

impl Catalog {
    /// Probe the backing store.
    pub async fn health_check(&self) -> RepositoryResult<bool> {
        self.health.health_check().await
    }
}
