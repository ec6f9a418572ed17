//! Unit tests for the in-memory backend.

use std::sync::Arc;

use bson::oid::ObjectId;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;

use super::local::{
    LocalBookRepository, LocalDropdownRepository, LocalEntityRepository, LocalHealth,
};
use crate::db::repository::{
    BookRepository, DropdownRepository, EntityRepository, HealthCheck,
};
use crate::models::{
    Author, AuthorId, Book, BookId, Category, CategoryId, Country, CountryId, Publisher,
    PublisherId,
};

fn author(id: i32, name: &str) -> Author {
    Author {
        id: None,
        author_id: AuthorId::new(id),
        author_name: name.to_string(),
    }
}

fn category(id: i32, name: &str) -> Category {
    Category {
        id: None,
        category_id: CategoryId::new(id),
        category_name: name.to_string(),
    }
}

fn publisher(id: i32, name: &str) -> Publisher {
    Publisher {
        id: None,
        publisher_id: PublisherId::new(id),
        publisher_name: name.to_string(),
    }
}

fn country(id: i32, name: &str) -> Country {
    Country {
        id: None,
        country_id: CountryId::new(id),
        country_name: name.to_string(),
        nationality: None,
        calling_code: None,
    }
}

fn book(id: i32, title: &str, author_id: i32, category_id: i32, publisher_id: i32) -> Book {
    Book {
        id: None,
        book_id: BookId::new(id),
        title: title.to_string(),
        description: None,
        isbn: format!("isbn-{}", id),
        price: 10.0,
        publish_date: Utc.with_ymd_and_hms(1949, 6, 8, 0, 0, 0).unwrap(),
        active: true,
        author_id: AuthorId::new(author_id),
        category_id: CategoryId::new(category_id),
        publisher_id: PublisherId::new(publisher_id),
    }
}

#[tokio::test]
async fn test_get_all_sorts_by_display_name() {
    let repo = LocalEntityRepository::new();
    repo.add(author(1, "Tolstoy")).await.unwrap();
    repo.add(author(2, "Austen")).await.unwrap();
    repo.add(author(3, "Orwell")).await.unwrap();

    let all = repo.get_all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|a| a.author_name.as_str()).collect();
    assert_eq!(names, vec!["Austen", "Orwell", "Tolstoy"]);
}

#[tokio::test]
async fn test_get_by_id_found_and_missing() {
    let repo = LocalEntityRepository::new();
    repo.add(author(7, "Orwell")).await.unwrap();

    let found = repo.get_by_id(AuthorId::new(7)).await.unwrap();
    assert_eq!(found.unwrap().author_name, "Orwell");

    let missing = repo.get_by_id(AuthorId::new(404)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_add_assigns_document_id() {
    let repo = LocalEntityRepository::new();
    let stored = repo.add(author(1, "Orwell")).await.unwrap();
    assert!(stored.id.is_some());

    let fetched = repo.get_by_id(AuthorId::new(1)).await.unwrap().unwrap();
    assert_eq!(fetched, stored);
}

#[tokio::test]
async fn test_add_keeps_duplicate_ids_and_first_match_wins() {
    let repo = LocalEntityRepository::new();
    repo.add(author(1, "First")).await.unwrap();
    repo.add(author(1, "Second")).await.unwrap();

    assert_eq!(repo.get_all().await.unwrap().len(), 2);
    let fetched = repo.get_by_id(AuthorId::new(1)).await.unwrap().unwrap();
    assert_eq!(fetched.author_name, "First");
}

#[tokio::test]
async fn test_update_replaces_and_preserves_document_id() {
    let repo = LocalEntityRepository::new();
    let stored = repo.add(author(1, "Orwel")).await.unwrap();

    let updated = repo.update(author(1, "Orwell")).await.unwrap().unwrap();
    assert_eq!(updated.author_name, "Orwell");
    assert_eq!(updated.id, stored.id);

    let fetched = repo.get_by_id(AuthorId::new(1)).await.unwrap().unwrap();
    assert_eq!(fetched, updated);
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_missing_returns_none() {
    let repo = LocalEntityRepository::<Author>::new();
    let result = repo.update(author(99, "Nobody")).await.unwrap();
    assert!(result.is_none());
    assert!(repo.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_removes_one_row() {
    let repo = LocalEntityRepository::new();
    repo.add(author(1, "Orwell")).await.unwrap();
    repo.add(author(2, "Austen")).await.unwrap();

    assert!(repo.delete(AuthorId::new(1)).await.unwrap());
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
    assert!(!repo.exists(AuthorId::new(1)).await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_returns_false_and_changes_nothing() {
    let repo = LocalEntityRepository::new();
    repo.add(author(1, "Orwell")).await.unwrap();

    assert!(!repo.delete(AuthorId::new(404)).await.unwrap());
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_exists_reflects_membership() {
    let repo = LocalEntityRepository::new();
    assert!(!repo.exists(AuthorId::new(1)).await.unwrap());
    repo.add(author(1, "Orwell")).await.unwrap();
    assert!(repo.exists(AuthorId::new(1)).await.unwrap());
}

#[tokio::test]
async fn test_clones_share_rows() {
    let repo = LocalEntityRepository::new();
    let view = repo.clone();
    repo.add(author(1, "Orwell")).await.unwrap();
    assert!(view.exists(AuthorId::new(1)).await.unwrap());
}

fn joined_fixture() -> (
    LocalBookRepository,
    LocalEntityRepository<Author>,
    LocalEntityRepository<Category>,
    LocalEntityRepository<Publisher>,
) {
    let books = LocalEntityRepository::new();
    let authors = LocalEntityRepository::new();
    let categories = LocalEntityRepository::new();
    let publishers = LocalEntityRepository::new();
    let repo = LocalBookRepository::new(
        books,
        authors.clone(),
        categories.clone(),
        publishers.clone(),
    );
    (repo, authors, categories, publishers)
}

#[tokio::test]
async fn test_listings_resolve_reference_names() {
    let (repo, authors, categories, publishers) = joined_fixture();
    authors.add(author(7, "George Orwell")).await.unwrap();
    categories.add(category(3, "Dystopia")).await.unwrap();
    publishers.add(publisher(11, "Secker & Warburg")).await.unwrap();
    repo.add(book(42, "Nineteen Eighty-Four", 7, 3, 11))
        .await
        .unwrap();

    let listings = repo.get_listings().await.unwrap();
    assert_eq!(listings.len(), 1);
    let listing = &listings[0];
    assert_eq!(listing.book_id, BookId::new(42));
    assert_eq!(listing.author_name.as_deref(), Some("George Orwell"));
    assert_eq!(listing.category_name.as_deref(), Some("Dystopia"));
    assert_eq!(listing.publisher_name.as_deref(), Some("Secker & Warburg"));
}

#[tokio::test]
async fn test_listings_keep_books_with_dangling_references() {
    let (repo, authors, _categories, _publishers) = joined_fixture();
    authors.add(author(7, "George Orwell")).await.unwrap();
    repo.add(book(1, "Orphaned", 404, 404, 404)).await.unwrap();

    let listings = repo.get_listings().await.unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].author_name, None);
    assert_eq!(listings[0].category_name, None);
    assert_eq!(listings[0].publisher_name, None);
}

#[tokio::test]
async fn test_listings_sorted_by_title() {
    let (repo, _authors, _categories, _publishers) = joined_fixture();
    repo.add(book(1, "Zebra", 1, 1, 1)).await.unwrap();
    repo.add(book(2, "Aardvark", 1, 1, 1)).await.unwrap();
    repo.add(book(3, "Mongoose", 1, 1, 1)).await.unwrap();

    let titles: Vec<String> = repo
        .get_listings()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.title)
        .collect();
    assert_eq!(titles, vec!["Aardvark", "Mongoose", "Zebra"]);
}

#[tokio::test]
async fn test_listings_observe_entity_writes() {
    let (repo, authors, _categories, _publishers) = joined_fixture();
    repo.add(book(1, "Animal Farm", 7, 1, 1)).await.unwrap();

    assert_eq!(repo.get_listings().await.unwrap()[0].author_name, None);

    authors.add(author(7, "George Orwell")).await.unwrap();
    assert_eq!(
        repo.get_listings().await.unwrap()[0].author_name.as_deref(),
        Some("George Orwell")
    );
}

#[tokio::test]
async fn test_dropdown_options_sorted_by_label_with_id_values() {
    let countries = LocalEntityRepository::new();
    countries.add(country(34, "Spain")).await.unwrap();
    countries.add(country(33, "France")).await.unwrap();
    countries.add(country(49, "Germany")).await.unwrap();

    let dropdowns = LocalDropdownRepository::new(
        countries,
        LocalEntityRepository::new(),
        LocalEntityRepository::new(),
        LocalEntityRepository::new(),
    );

    let options = dropdowns.country_options().await.unwrap();
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["France", "Germany", "Spain"]);
    assert_eq!(options[0].value, "33");
}

#[tokio::test]
async fn test_empty_dropdowns_are_empty() {
    let dropdowns = LocalDropdownRepository::new(
        LocalEntityRepository::new(),
        LocalEntityRepository::new(),
        LocalEntityRepository::new(),
        LocalEntityRepository::new(),
    );
    assert!(dropdowns.author_options().await.unwrap().is_empty());
    assert!(dropdowns.publisher_options().await.unwrap().is_empty());
    assert!(dropdowns.category_options().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_local_health_always_up() {
    assert!(LocalHealth.health_check().await.unwrap());
}

#[tokio::test]
async fn test_update_does_not_resurrect_deleted_rows() {
    let repo = LocalEntityRepository::new();
    repo.add(author(1, "Orwell")).await.unwrap();
    repo.delete(AuthorId::new(1)).await.unwrap();

    assert!(repo.update(author(1, "Orwell")).await.unwrap().is_none());
    assert!(!repo.exists(AuthorId::new(1)).await.unwrap());
}

#[tokio::test]
async fn test_document_id_stable_across_updates() {
    let repo = LocalEntityRepository::new();
    let stored = repo.add(author(1, "A")).await.unwrap();
    let first_id: Option<ObjectId> = stored.id;

    repo.update(author(1, "B")).await.unwrap();
    repo.update(author(1, "C")).await.unwrap();

    let fetched = repo.get_by_id(AuthorId::new(1)).await.unwrap().unwrap();
    assert_eq!(fetched.id, first_id);
    assert_eq!(fetched.author_name, "C");
}

#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_unmatched_update_and_delete_emit_debug_events() {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(writer.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);

    let repo = LocalEntityRepository::<Author>::new();
    assert!(repo.update(author(9, "Nobody")).await.unwrap().is_none());
    assert!(!repo.delete(AuthorId::new(9)).await.unwrap());
    drop(guard);

    let output = String::from_utf8(writer.0.lock().clone()).unwrap();
    assert!(output.contains("replace matched no row"));
    assert!(output.contains("delete matched no row"));
}
