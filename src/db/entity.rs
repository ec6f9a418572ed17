//! Entity bindings for the generic repository.
//!
//! Each catalog entity implements [`CatalogEntity`], which tells a backend
//! everything it needs to serve that entity generically: which collection
//! family it belongs to, which document field holds its numeric id, which
//! field holds its display name (the default sort key and dropdown label),
//! and how to read and write both identifiers on a value.

use std::fmt;

use bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    Author, AuthorId, Book, BookId, Category, CategoryId, Country, CountryId, Publisher,
    PublisherId,
};

/// The catalog's entity families, one per stored collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Book,
    Author,
    Category,
    Publisher,
    Country,
}

impl EntityKind {
    /// Stable lowercase name used in logs and error context.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Author => "author",
            Self::Category => "category",
            Self::Publisher => "publisher",
            Self::Country => "country",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed numeric entity identifier.
pub trait EntityId: Copy + Eq + Ord + fmt::Display + fmt::Debug + Send + Sync + 'static {
    /// The raw integer stored in the document.
    fn raw(self) -> i32;
}

macro_rules! impl_entity_id {
    ($($id:ty),+ $(,)?) => {
        $(
            impl EntityId for $id {
                fn raw(self) -> i32 {
                    self.0
                }
            }
        )+
    };
}

impl_entity_id!(BookId, AuthorId, CategoryId, PublisherId, CountryId);

/// Binding between an entity type and its stored document shape.
///
/// The supertraits are exactly what the backends need: serde for document
/// conversion, `Unpin` for driver cursors, and `Clone + PartialEq + Debug`
/// for the in-memory backend and tests.
pub trait CatalogEntity:
    Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned + Unpin + Send + Sync + 'static
{
    /// Typed numeric identifier for this entity.
    type Id: EntityId;

    /// Which collection family the entity belongs to.
    const KIND: EntityKind;
    /// Document field holding the numeric business id.
    const ID_FIELD: &'static str;
    /// Document field holding the display name, used for sorting and labels.
    const NAME_FIELD: &'static str;

    fn entity_id(&self) -> Self::Id;
    fn display_name(&self) -> &str;
    fn doc_id(&self) -> Option<ObjectId>;
    fn set_doc_id(&mut self, id: ObjectId);
}

impl CatalogEntity for Book {
    type Id = BookId;

    const KIND: EntityKind = EntityKind::Book;
    const ID_FIELD: &'static str = "book_id";
    const NAME_FIELD: &'static str = "title";

    fn entity_id(&self) -> BookId {
        self.book_id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn doc_id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_doc_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl CatalogEntity for Author {
    type Id = AuthorId;

    const KIND: EntityKind = EntityKind::Author;
    const ID_FIELD: &'static str = "author_id";
    const NAME_FIELD: &'static str = "author_name";

    fn entity_id(&self) -> AuthorId {
        self.author_id
    }

    fn display_name(&self) -> &str {
        &self.author_name
    }

    fn doc_id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_doc_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl CatalogEntity for Category {
    type Id = CategoryId;

    const KIND: EntityKind = EntityKind::Category;
    const ID_FIELD: &'static str = "category_id";
    const NAME_FIELD: &'static str = "category_name";

    fn entity_id(&self) -> CategoryId {
        self.category_id
    }

    fn display_name(&self) -> &str {
        &self.category_name
    }

    fn doc_id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_doc_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl CatalogEntity for Publisher {
    type Id = PublisherId;

    const KIND: EntityKind = EntityKind::Publisher;
    const ID_FIELD: &'static str = "publisher_id";
    const NAME_FIELD: &'static str = "publisher_name";

    fn entity_id(&self) -> PublisherId {
        self.publisher_id
    }

    fn display_name(&self) -> &str {
        &self.publisher_name
    }

    fn doc_id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_doc_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

impl CatalogEntity for Country {
    type Id = CountryId;

    const KIND: EntityKind = EntityKind::Country;
    const ID_FIELD: &'static str = "country_id";
    const NAME_FIELD: &'static str = "country_name";

    fn entity_id(&self) -> CountryId {
        self.country_id
    }

    fn display_name(&self) -> &str {
        &self.country_name
    }

    fn doc_id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_doc_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}
