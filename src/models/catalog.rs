//! Catalog entities persisted in the document store.
//!
//! Every entity carries two identifiers: the storage-assigned document id
//! (`_id`, an [`ObjectId`] populated by the backend) and a numeric business
//! id (`book_id`, `author_id`, ...) that the rest of the application uses
//! for lookups and cross-references. Field names match the stored document
//! fields one to one, so no rename attributes are needed beyond `_id`.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::define_id_type;

define_id_type!(
    /// Numeric business identifier of a book (`book_id`).
    BookId
);
define_id_type!(
    /// Numeric business identifier of an author (`author_id`).
    AuthorId
);
define_id_type!(
    /// Numeric business identifier of a category (`category_id`).
    CategoryId
);
define_id_type!(
    /// Numeric business identifier of a publisher (`publisher_id`).
    PublisherId
);
define_id_type!(
    /// Numeric business identifier of a country (`country_id`).
    CountryId
);

/// A book record, referencing its author, category and publisher by
/// numeric id. References are not enforced: a book may point at ids with
/// no matching document and still round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Storage document id. `None` until the backend assigns one.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub book_id: BookId,
    pub title: String,
    pub description: Option<String>,
    pub isbn: String,
    pub price: f64,
    /// Stored as a native document datetime (millisecond precision).
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub publish_date: DateTime<Utc>,
    pub active: bool,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
    pub publisher_id: PublisherId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub author_id: AuthorId,
    pub author_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub category_id: CategoryId,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub publisher_id: PublisherId,
    pub publisher_name: String,
}

/// A country record used for nationality dropdowns. Only the name is
/// required; the extra descriptive fields may be absent in stored data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub country_id: CountryId,
    pub country_name: String,
    pub nationality: Option<String>,
    pub calling_code: Option<String>,
}
