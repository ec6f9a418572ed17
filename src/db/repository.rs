//! Repository trait definitions.
//!
//! The interface is split by concern: [`EntityRepository`] covers the CRUD
//! surface shared by every catalog entity, [`BookRepository`] adds the
//! denormalized listing query on top of it, [`DropdownRepository`] serves
//! the form option lists, and [`HealthCheck`] probes backend liveness.
//!
//! All methods report absence through their return types. `get_by_id` and
//! `update` return `Ok(None)` for a missing entity, `delete` and `exists`
//! return `Ok(false)`; `Err` always means the backend itself failed.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use super::entity::CatalogEntity;
use crate::models::{Book, BookListing, DropdownItem};

/// CRUD operations shared by every catalog entity.
///
/// One implementation of this trait serves all entity types; the
/// [`CatalogEntity`] binding supplies the collection name, id field and
/// sort key that make each instantiation behave like a dedicated store.
#[async_trait]
pub trait EntityRepository<T: CatalogEntity>: Send + Sync {
    /// Fetch every entity, sorted ascending by display name.
    async fn get_all(&self) -> RepositoryResult<Vec<T>>;

    /// Fetch the entity with the given numeric id, or `None`.
    ///
    /// If duplicate ids exist in storage, the first match wins.
    async fn get_by_id(&self, id: T::Id) -> RepositoryResult<Option<T>>;

    /// Insert the entity unconditionally and return it with its
    /// storage-assigned document id filled in.
    ///
    /// No uniqueness check is performed on the numeric id; callers own
    /// id allocation.
    async fn add(&self, entity: T) -> RepositoryResult<T>;

    /// Replace the stored entity with the same numeric id in a single
    /// conditional write. Returns the updated entity, or `None` if no
    /// document matched.
    async fn update(&self, entity: T) -> RepositoryResult<Option<T>>;

    /// Delete at most one entity with the given id. Returns whether a
    /// document was removed.
    async fn delete(&self, id: T::Id) -> RepositoryResult<bool>;

    /// Check whether any entity with the given id exists.
    async fn exists(&self, id: T::Id) -> RepositoryResult<bool>;
}

/// Book storage: the shared CRUD surface plus the listing projection.
#[async_trait]
pub trait BookRepository: EntityRepository<Book> {
    /// Fetch every book joined with the display names of its author,
    /// category and publisher, sorted ascending by title.
    ///
    /// The join is a left outer join: books whose references point at
    /// missing entities are still returned, with `None` in the
    /// corresponding name fields.
    async fn get_listings(&self) -> RepositoryResult<Vec<BookListing>>;
}

/// Read-only option lists for form dropdowns.
///
/// Each method projects one collection to `(value, label)` pairs, where
/// the value is the numeric id rendered as a string, sorted ascending
/// by label.
#[async_trait]
pub trait DropdownRepository: Send + Sync {
    async fn country_options(&self) -> RepositoryResult<Vec<DropdownItem>>;
    async fn author_options(&self) -> RepositoryResult<Vec<DropdownItem>>;
    async fn publisher_options(&self) -> RepositoryResult<Vec<DropdownItem>>;
    async fn category_options(&self) -> RepositoryResult<Vec<DropdownItem>>;
}

/// Backend liveness probe.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Returns `Ok(true)` when the backing store answers, `Ok(false)`
    /// when it is unreachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
