//! In-memory repository implementation for unit testing and local development.
//!
//! Rows live in `Arc<RwLock<Vec<T>>>` stores, so cloning a repository is
//! cheap and every clone observes the same data. The composite
//! repositories ([`LocalBookRepository`], [`LocalDropdownRepository`]) are
//! built over the same shared stores as the per-entity handles, which
//! keeps listings and option lists consistent with entity writes.
//!
//! Semantics deliberately mirror the MongoDB backend: unsorted insertion
//! order is preserved internally, reads sort on demand, `delete` removes
//! at most one row, and `add` assigns a fresh document id.

use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use parking_lot::RwLock;

use crate::db::entity::CatalogEntity;
use crate::db::repository::{
    BookRepository, DropdownRepository, EntityRepository, HealthCheck, RepositoryResult,
};
use crate::models::{Author, Book, BookId, BookListing, Category, Country, DropdownItem, Publisher};

/// Generic in-memory store for one entity family.
#[derive(Debug, Clone)]
pub struct LocalEntityRepository<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> LocalEntityRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> Default for LocalEntityRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> LocalEntityRepository<T> {
    /// Copy of the rows in insertion order, for join and projection use.
    fn snapshot(&self) -> Vec<T> {
        self.rows.read().clone()
    }
}

#[async_trait]
impl<T: CatalogEntity> EntityRepository<T> for LocalEntityRepository<T> {
    async fn get_all(&self) -> RepositoryResult<Vec<T>> {
        let mut rows = self.snapshot();
        rows.sort_by(|a, b| a.display_name().cmp(b.display_name()));
        Ok(rows)
    }

    async fn get_by_id(&self, id: T::Id) -> RepositoryResult<Option<T>> {
        Ok(self
            .rows
            .read()
            .iter()
            .find(|row| row.entity_id() == id)
            .cloned())
    }

    async fn add(&self, mut entity: T) -> RepositoryResult<T> {
        entity.set_doc_id(ObjectId::new());
        self.rows.write().push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> RepositoryResult<Option<T>> {
        let mut rows = self.rows.write();
        match rows.iter_mut().find(|row| row.entity_id() == entity.entity_id()) {
            Some(slot) => {
                let mut replacement = entity;
                // Replacing a document never changes its storage id.
                if let Some(doc_id) = slot.doc_id() {
                    replacement.set_doc_id(doc_id);
                }
                *slot = replacement.clone();
                Ok(Some(replacement))
            }
            None => {
                tracing::debug!(
                    entity = %T::KIND,
                    id = %entity.entity_id(),
                    "replace matched no row"
                );
                Ok(None)
            }
        }
    }

    async fn delete(&self, id: T::Id) -> RepositoryResult<bool> {
        let mut rows = self.rows.write();
        match rows.iter().position(|row| row.entity_id() == id) {
            Some(index) => {
                rows.remove(index);
                Ok(true)
            }
            None => {
                tracing::debug!(entity = %T::KIND, id = %id, "delete matched no row");
                Ok(false)
            }
        }
    }

    async fn exists(&self, id: T::Id) -> RepositoryResult<bool> {
        Ok(self.rows.read().iter().any(|row| row.entity_id() == id))
    }
}

/// Book repository over shared in-memory stores.
///
/// CRUD delegates to the wrapped book store; listings join against the
/// author, category and publisher stores handed in at construction.
#[derive(Debug, Clone)]
pub struct LocalBookRepository {
    books: LocalEntityRepository<Book>,
    authors: LocalEntityRepository<Author>,
    categories: LocalEntityRepository<Category>,
    publishers: LocalEntityRepository<Publisher>,
}

impl LocalBookRepository {
    pub fn new(
        books: LocalEntityRepository<Book>,
        authors: LocalEntityRepository<Author>,
        categories: LocalEntityRepository<Category>,
        publishers: LocalEntityRepository<Publisher>,
    ) -> Self {
        Self {
            books,
            authors,
            categories,
            publishers,
        }
    }
}

#[async_trait]
impl EntityRepository<Book> for LocalBookRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Book>> {
        self.books.get_all().await
    }

    async fn get_by_id(&self, id: BookId) -> RepositoryResult<Option<Book>> {
        self.books.get_by_id(id).await
    }

    async fn add(&self, entity: Book) -> RepositoryResult<Book> {
        self.books.add(entity).await
    }

    async fn update(&self, entity: Book) -> RepositoryResult<Option<Book>> {
        self.books.update(entity).await
    }

    async fn delete(&self, id: BookId) -> RepositoryResult<bool> {
        self.books.delete(id).await
    }

    async fn exists(&self, id: BookId) -> RepositoryResult<bool> {
        self.books.exists(id).await
    }
}

#[async_trait]
impl BookRepository for LocalBookRepository {
    async fn get_listings(&self) -> RepositoryResult<Vec<BookListing>> {
        let books = self.books.snapshot();
        let authors = self.authors.snapshot();
        let categories = self.categories.snapshot();
        let publishers = self.publishers.snapshot();

        let mut listings: Vec<BookListing> = books
            .into_iter()
            .map(|book| {
                let author_name = authors
                    .iter()
                    .find(|a| a.author_id == book.author_id)
                    .map(|a| a.author_name.clone());
                let category_name = categories
                    .iter()
                    .find(|c| c.category_id == book.category_id)
                    .map(|c| c.category_name.clone());
                let publisher_name = publishers
                    .iter()
                    .find(|p| p.publisher_id == book.publisher_id)
                    .map(|p| p.publisher_name.clone());

                BookListing {
                    book_id: book.book_id,
                    title: book.title,
                    description: book.description,
                    isbn: book.isbn,
                    price: book.price,
                    publish_date: book.publish_date,
                    active: book.active,
                    author_id: book.author_id,
                    category_id: book.category_id,
                    publisher_id: book.publisher_id,
                    author_name,
                    category_name,
                    publisher_name,
                }
            })
            .collect();

        listings.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(listings)
    }
}

/// Dropdown projections over shared in-memory stores.
#[derive(Debug, Clone)]
pub struct LocalDropdownRepository {
    countries: LocalEntityRepository<Country>,
    authors: LocalEntityRepository<Author>,
    publishers: LocalEntityRepository<Publisher>,
    categories: LocalEntityRepository<Category>,
}

impl LocalDropdownRepository {
    pub fn new(
        countries: LocalEntityRepository<Country>,
        authors: LocalEntityRepository<Author>,
        publishers: LocalEntityRepository<Publisher>,
        categories: LocalEntityRepository<Category>,
    ) -> Self {
        Self {
            countries,
            authors,
            publishers,
            categories,
        }
    }
}

fn options_of<T: CatalogEntity>(repo: &LocalEntityRepository<T>) -> Vec<DropdownItem> {
    let mut items: Vec<DropdownItem> = repo
        .snapshot()
        .iter()
        .map(|row| DropdownItem::new(row.entity_id().to_string(), row.display_name()))
        .collect();
    items.sort_by(|a, b| a.label.cmp(&b.label));
    items
}

#[async_trait]
impl DropdownRepository for LocalDropdownRepository {
    async fn country_options(&self) -> RepositoryResult<Vec<DropdownItem>> {
        Ok(options_of(&self.countries))
    }

    async fn author_options(&self) -> RepositoryResult<Vec<DropdownItem>> {
        Ok(options_of(&self.authors))
    }

    async fn publisher_options(&self) -> RepositoryResult<Vec<DropdownItem>> {
        Ok(options_of(&self.publishers))
    }

    async fn category_options(&self) -> RepositoryResult<Vec<DropdownItem>> {
        Ok(options_of(&self.categories))
    }
}

/// Health check for the in-memory backend. Always healthy.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHealth;

#[async_trait]
impl HealthCheck for LocalHealth {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
