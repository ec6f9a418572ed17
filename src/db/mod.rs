//! Database module for library catalog storage.
//!
//! This module provides abstractions for catalog data access via the Repository
//! pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! The database module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (web handlers, import jobs, etc.)    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Catalog (catalog.rs) - Assembled Repository Handles    │
//! │  - books / authors / categories / publishers / countries │
//! │  - dropdowns, health                                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository.rs) - Abstract Interface │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────────────────┐
//!     │                                              │
//! ┌───▼──────────────────────┐      ┌────────────────▼─────┐
//! │    Mongo Repository       │      │   Local Repository   │
//! │  (MongoDB, aggregation)   │      │     (in-memory)      │
//! └───────────────────────────┘      └──────────────────────┘
//! ```
//!
//! # Repository Pattern
//! The module includes:
//! - `repository`: Trait definitions for catalog data access
//! - `entity`: Bindings that let one generic repository serve every entity
//! - `repositories::mongo`: MongoDB implementation using the official driver
//! - `repositories::local`: In-memory implementation for unit testing and local development
//! - `factory`: Factory for creating a fully assembled [`Catalog`]
//! - `repo_config` / `settings`: TOML and environment configuration
//!
//! # Recommended Usage
//!
//! ```ignore
//! use biblio_data::db::RepositoryFactory;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = RepositoryFactory::from_env().await?;
//!
//!     let books = catalog.books.get_listings().await?;
//!     let countries = catalog.dropdowns.country_options().await?;
//!     Ok(())
//! }
//! ```
//!
//! # MongoDB Implementation
//! MongoDB-specific code is in `repositories::mongo`.

#[cfg(not(any(feature = "mongo-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod catalog;
pub mod entity;
pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod settings;


// ==================== Repository Pattern Exports ====================

pub use catalog::Catalog;
pub use entity::{CatalogEntity, EntityId, EntityKind};
pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repository::{
    BookRepository, DropdownRepository, EntityRepository, ErrorContext, HealthCheck,
    RepositoryError, RepositoryResult,
};
pub use settings::{CollectionNames, MongoConfig};

#[cfg(feature = "local-repo")]
pub use repositories::{
    LocalBookRepository, LocalDropdownRepository, LocalEntityRepository, LocalHealth,
};
#[cfg(feature = "mongo-repo")]
pub use repositories::{
    MongoBookRepository, MongoCatalog, MongoDropdownRepository, MongoEntityRepository,
};
