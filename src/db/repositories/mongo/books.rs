//! Book repository and the denormalized listing aggregation.

use async_trait::async_trait;
use bson::{doc, Document};
use futures::stream::TryStreamExt;

use super::{MongoCatalog, MongoEntityRepository};
use crate::db::repository::{BookRepository, EntityRepository, RepositoryResult};
use crate::db::settings::CollectionNames;
use crate::models::{Book, BookId, BookListing};

/// MongoDB-backed book repository.
///
/// The CRUD surface is the shared generic implementation; listings run a
/// single server-side aggregation that joins author, category and
/// publisher names onto each book.
#[derive(Debug, Clone)]
pub struct MongoBookRepository {
    books: MongoEntityRepository<Book>,
    collections: CollectionNames,
}

impl MongoBookRepository {
    pub(super) fn new(store: &MongoCatalog) -> Self {
        Self {
            books: store.entity_repository::<Book>(),
            collections: store.config.collections.clone(),
        }
    }
}

/// Build the listing aggregation pipeline.
///
/// Three lookup/unwind pairs perform a left outer join against the
/// reference collections (`preserveNullAndEmptyArrays` keeps books whose
/// references dangle), the projection flattens the joined documents into
/// the [`BookListing`] shape, and the final stage sorts by title. The
/// reference collections store their numeric ids under the same field
/// names as the book document, so local and foreign fields coincide.
fn listing_pipeline(collections: &CollectionNames) -> Vec<Document> {
    let lookup = |from: &str, field: &str, alias: &str| {
        doc! {
            "$lookup": {
                "from": from,
                "localField": field,
                "foreignField": field,
                "as": alias,
            }
        }
    };
    let unwind = |path: &str| {
        doc! {
            "$unwind": {
                "path": path,
                "preserveNullAndEmptyArrays": true,
            }
        }
    };

    vec![
        lookup(&collections.authors, "author_id", "author"),
        unwind("$author"),
        lookup(&collections.categories, "category_id", "category"),
        unwind("$category"),
        lookup(&collections.publishers, "publisher_id", "publisher"),
        unwind("$publisher"),
        doc! {
            "$project": {
                "_id": 0,
                "book_id": 1,
                "title": 1,
                "description": 1,
                "isbn": 1,
                "price": 1,
                "publish_date": 1,
                "active": 1,
                "author_id": 1,
                "category_id": 1,
                "publisher_id": 1,
                "author_name": "$author.author_name",
                "category_name": "$category.category_name",
                "publisher_name": "$publisher.publisher_name",
            }
        },
        doc! { "$sort": { "title": 1 } },
    ]
}

#[async_trait]
impl EntityRepository<Book> for MongoBookRepository {
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
impl BookRepository for MongoBookRepository {
    async fn get_listings(&self) -> RepositoryResult<Vec<BookListing>> {
        let cursor = self
            .books
            .collection
            .aggregate(listing_pipeline(&self.collections))
            .with_type::<BookListing>()
            .await?;
        Ok(cursor.try_collect().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_has_three_join_pairs_then_project_and_sort() {
        let pipeline = listing_pipeline(&CollectionNames::default());
        assert_eq!(pipeline.len(), 8);
        assert!(pipeline[0].contains_key("$lookup"));
        assert!(pipeline[1].contains_key("$unwind"));
        assert!(pipeline[6].contains_key("$project"));
        assert!(pipeline[7].contains_key("$sort"));
    }

    #[test]
    fn test_lookups_follow_configured_collection_names() {
        let mut names = CollectionNames::default();
        names.authors = "contributors".to_string();

        let pipeline = listing_pipeline(&names);
        let lookup = pipeline[0].get_document("$lookup").unwrap();
        assert_eq!(lookup.get_str("from").unwrap(), "contributors");
        assert_eq!(lookup.get_str("localField").unwrap(), "author_id");
        assert_eq!(lookup.get_str("foreignField").unwrap(), "author_id");
    }

    #[test]
    fn test_unwind_preserves_books_with_dangling_references() {
        let pipeline = listing_pipeline(&CollectionNames::default());
        for stage in [&pipeline[1], &pipeline[3], &pipeline[5]] {
            let unwind = stage.get_document("$unwind").unwrap();
            assert!(unwind.get_bool("preserveNullAndEmptyArrays").unwrap());
        }
    }

    #[test]
    fn test_projection_flattens_reference_names() {
        let pipeline = listing_pipeline(&CollectionNames::default());
        let project = pipeline[6].get_document("$project").unwrap();
        assert_eq!(project.get_str("author_name").unwrap(), "$author.author_name");
        assert_eq!(
            project.get_str("publisher_name").unwrap(),
            "$publisher.publisher_name"
        );
        assert_eq!(project.get_i32("_id").unwrap(), 0);
    }

    #[test]
    fn test_final_stage_sorts_by_title() {
        let pipeline = listing_pipeline(&CollectionNames::default());
        assert_eq!(pipeline[7], doc! { "$sort": { "title": 1 } });
    }
}
