//! Read models produced by repository queries.
//!
//! These types are never written back to the store. They are either
//! assembled by the backend (in-memory join) or deserialized straight
//! from an aggregation result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{AuthorId, BookId, CategoryId, PublisherId};

/// A book row denormalized for list views: every scalar field of the book
/// plus the display names of its author, category and publisher.
///
/// The name fields are `None` when the referenced entity does not exist,
/// so a book with dangling references still appears in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookListing {
    pub book_id: BookId,
    pub title: String,
    pub description: Option<String>,
    pub isbn: String,
    pub price: f64,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub publish_date: DateTime<Utc>,
    pub active: bool,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub publisher_id: PublisherId,
    pub author_name: Option<String>,
    pub category_name: Option<String>,
    pub publisher_name: Option<String>,
}

/// One selectable entry for a form dropdown: the entity's numeric id
/// rendered as a string plus its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownItem {
    pub value: String,
    pub label: String,
}

impl DropdownItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
