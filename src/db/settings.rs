//! Connection settings for the catalog's document store.
//!
//! Pure data, no driver types: the TOML configuration layer and the
//! factory both build these regardless of which backend features are
//! compiled in. Only [`MongoCatalog`](super::repositories::mongo::MongoCatalog)
//! actually consumes them.

use serde::{Deserialize, Serialize};

use super::entity::EntityKind;

/// Configuration for connecting to MongoDB.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string, e.g. `mongodb://localhost:27017`
    pub connection_string: String,
    /// Database holding the catalog collections
    pub database: String,
    /// Collection name for each entity family
    pub collections: CollectionNames,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            connection_string: "mongodb://localhost:27017".to_string(),
            database: "library".to_string(),
            collections: CollectionNames::default(),
        }
    }
}

impl MongoConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `MONGODB_URI` or `MONGODB_URL`: Connection string (required)
    /// - `MONGODB_DATABASE`: Database name (default: "library")
    pub fn from_env() -> Result<Self, String> {
        let connection_string = std::env::var("MONGODB_URI")
            .or_else(|_| std::env::var("MONGODB_URL"))
            .map_err(|_| "MONGODB_URI or MONGODB_URL must be set".to_string())?;

        let database =
            std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| default_database());

        Ok(Self {
            connection_string,
            database,
            collections: CollectionNames::default(),
        })
    }

    /// Create configuration for the given connection string, keeping
    /// defaults for everything else.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            connection_string: uri.into(),
            ..Default::default()
        }
    }
}

/// Collection name for each entity family, individually overridable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionNames {
    #[serde(default = "default_books")]
    pub books: String,
    #[serde(default = "default_authors")]
    pub authors: String,
    #[serde(default = "default_categories")]
    pub categories: String,
    #[serde(default = "default_publishers")]
    pub publishers: String,
    #[serde(default = "default_countries")]
    pub countries: String,
}

impl Default for CollectionNames {
    fn default() -> Self {
        Self {
            books: default_books(),
            authors: default_authors(),
            categories: default_categories(),
            publishers: default_publishers(),
            countries: default_countries(),
        }
    }
}

impl CollectionNames {
    /// The configured collection name for an entity family.
    pub fn name_for(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Book => &self.books,
            EntityKind::Author => &self.authors,
            EntityKind::Category => &self.categories,
            EntityKind::Publisher => &self.publishers,
            EntityKind::Country => &self.countries,
        }
    }
}

fn default_books() -> String {
    "books".to_string()
}

fn default_authors() -> String {
    "authors".to_string()
}

fn default_categories() -> String {
    "categories".to_string()
}

fn default_publishers() -> String {
    "publishers".to_string()
}

fn default_countries() -> String {
    "countries".to_string()
}

fn default_database() -> String {
    "library".to_string()
}
