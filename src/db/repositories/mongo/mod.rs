//! MongoDB repository implementation.
//!
//! This module implements the repository traits against MongoDB using the
//! official async driver. One [`MongoCatalog`] owns the database handle;
//! typed repositories borrow collections from it, so every repository
//! created from the same store shares the driver's connection machinery.
//!
//! ## Design
//!
//! - One generic [`MongoEntityRepository`] serves the CRUD surface for
//!   every entity; the [`CatalogEntity`] binding supplies collection
//!   name, id field and sort key per instantiation.
//! - `update` is one conditional replace command, never a read followed
//!   by a write, so a concurrent delete cannot be overwritten.
//! - The book listing join runs server-side as an aggregation pipeline.
//!
//! ## Configuration
//!
//! Environment variables (see [`MongoConfig::from_env`]):
//! - `MONGODB_URI` or `MONGODB_URL`: Connection string (required)
//! - `MONGODB_DATABASE`: Database name (default: "library")

use async_trait::async_trait;
use bson::{doc, Document};
use futures::stream::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};

use crate::db::entity::{CatalogEntity, EntityId};
use crate::db::repository::{EntityRepository, HealthCheck, RepositoryResult};
use crate::db::settings::MongoConfig;

mod books;
mod dropdowns;

pub use books::MongoBookRepository;
pub use dropdowns::MongoDropdownRepository;

/// Shared handle to the catalog database.
#[derive(Debug, Clone)]
pub struct MongoCatalog {
    database: Database,
    config: MongoConfig,
}

impl MongoCatalog {
    /// Connect to MongoDB with the given configuration.
    ///
    /// The driver establishes connections lazily, so this validates the
    /// connection string but does not guarantee the server is reachable;
    /// use [`HealthCheck::health_check`] for that.
    pub async fn connect(config: MongoConfig) -> RepositoryResult<Self> {
        let client = Client::with_uri_str(&config.connection_string).await?;
        let database = client.database(&config.database);
        tracing::info!(database = %config.database, "connected to MongoDB catalog store");
        Ok(Self { database, config })
    }

    /// The typed collection backing an entity family.
    fn collection<T: CatalogEntity>(&self) -> Collection<T> {
        self.database
            .collection::<T>(self.config.collections.name_for(T::KIND))
    }

    /// A CRUD repository over this store for one entity family.
    pub fn entity_repository<T: CatalogEntity>(&self) -> MongoEntityRepository<T> {
        MongoEntityRepository {
            collection: self.collection::<T>(),
        }
    }

    /// The book repository over this store.
    pub fn book_repository(&self) -> MongoBookRepository {
        MongoBookRepository::new(self)
    }

    /// The dropdown repository over this store.
    pub fn dropdown_repository(&self) -> MongoDropdownRepository {
        MongoDropdownRepository::new(self)
    }
}

#[async_trait]
impl HealthCheck for MongoCatalog {
    async fn health_check(&self) -> RepositoryResult<bool> {
        match self.database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => Ok(true),
            Err(err) => {
                tracing::warn!(error = %err, "MongoDB ping failed");
                Ok(false)
            }
        }
    }
}

/// Generic MongoDB-backed repository for one entity collection.
#[derive(Debug, Clone)]
pub struct MongoEntityRepository<T: CatalogEntity> {
    collection: Collection<T>,
}

impl<T: CatalogEntity> MongoEntityRepository<T> {
    fn id_filter(id: T::Id) -> Document {
        let mut filter = Document::new();
        filter.insert(T::ID_FIELD, id.raw());
        filter
    }

    fn name_sort() -> Document {
        let mut sort = Document::new();
        sort.insert(T::NAME_FIELD, 1);
        sort
    }
}

#[async_trait]
impl<T: CatalogEntity> EntityRepository<T> for MongoEntityRepository<T> {
    async fn get_all(&self) -> RepositoryResult<Vec<T>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(Self::name_sort())
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn get_by_id(&self, id: T::Id) -> RepositoryResult<Option<T>> {
        Ok(self.collection.find_one(Self::id_filter(id)).await?)
    }

    async fn add(&self, mut entity: T) -> RepositoryResult<T> {
        let result = self.collection.insert_one(&entity).await?;
        if let Some(oid) = result.inserted_id.as_object_id() {
            entity.set_doc_id(oid);
        }
        tracing::debug!(entity = %T::KIND, id = %entity.entity_id(), "inserted document");
        Ok(entity)
    }

    async fn update(&self, entity: T) -> RepositoryResult<Option<T>> {
        let replaced = self
            .collection
            .find_one_and_replace(Self::id_filter(entity.entity_id()), &entity)
            .return_document(ReturnDocument::After)
            .await?;
        if replaced.is_none() {
            tracing::debug!(
                entity = %T::KIND,
                id = %entity.entity_id(),
                "replace matched no document"
            );
        }
        Ok(replaced)
    }

    async fn delete(&self, id: T::Id) -> RepositoryResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;
        if result.deleted_count == 0 {
            tracing::debug!(entity = %T::KIND, id = %id, "delete matched no document");
        }
        Ok(result.deleted_count > 0)
    }

    async fn exists(&self, id: T::Id) -> RepositoryResult<bool> {
        let count = self
            .collection
            .count_documents(Self::id_filter(id))
            .limit(1)
            .await?;
        Ok(count > 0)
    }
}
