//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository instances
//! based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::catalog::Catalog;
use super::repo_config::RepositoryConfig;
#[cfg(feature = "local-repo")]
use super::repositories::local::{
    LocalBookRepository, LocalDropdownRepository, LocalEntityRepository, LocalHealth,
};
#[cfg(feature = "mongo-repo")]
use super::repositories::mongo::MongoCatalog;
use super::repository::{RepositoryError, RepositoryResult};
use super::settings::MongoConfig;
use crate::models::{Author, Category, Country, Publisher};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// MongoDB implementation
    Mongo,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("mongo", "local")
    ///
    /// # Returns
    /// * `Ok(RepositoryType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE` environment variable. Defaults to Mongo if a
    /// connection string is present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("MONGODB_URI").is_ok() || std::env::var("MONGODB_URL").is_ok() {
            Self::Mongo
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating catalog instances.
///
/// This factory provides a centralized way to create the full set of
/// repository handles with proper initialization and configuration.
///
/// # Example
/// ```ignore
/// use biblio_data::db::{MongoConfig, RepositoryFactory, RepositoryType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a MongoDB-backed catalog
///     let config = MongoConfig::from_env()?;
///     let _catalog = RepositoryFactory::create(RepositoryType::Mongo, Some(&config)).await?;
///
///     // Create an in-memory catalog
///     let catalog = RepositoryFactory::create_local();
///
///     Ok(())
/// }
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a catalog based on repository type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `mongo_config` - Optional database configuration (required for Mongo)
    ///
    /// # Returns
    /// * `Ok(Catalog)` - Assembled repository handles
    /// * `Err(RepositoryError)` - If creation fails
    pub async fn create(
        repo_type: RepositoryType,
        mongo_config: Option<&MongoConfig>,
    ) -> RepositoryResult<Catalog> {
        match repo_type {
            RepositoryType::Mongo => {
                #[cfg(feature = "mongo-repo")]
                {
                    let config = mongo_config.ok_or_else(|| {
                        RepositoryError::configuration("Mongo repository requires MongoConfig")
                    })?;
                    Self::create_mongo(config).await
                }
                #[cfg(not(feature = "mongo-repo"))]
                {
                    let _ = mongo_config;
                    Err(RepositoryError::configuration(
                        "Mongo repository feature not enabled",
                    ))
                }
            }
            RepositoryType::Local => {
                #[cfg(feature = "local-repo")]
                {
                    Ok(Self::create_local())
                }
                #[cfg(not(feature = "local-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Local repository feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create a MongoDB-backed catalog.
    ///
    /// # Arguments
    /// * `config` - MongoDB configuration
    ///
    /// # Returns
    /// * `Ok(Catalog)` - Catalog over one shared connection
    /// * `Err(RepositoryError)` - If initialization fails
    #[cfg(feature = "mongo-repo")]
    pub async fn create_mongo(config: &MongoConfig) -> RepositoryResult<Catalog> {
        let store = MongoCatalog::connect(config.clone()).await?;
        Ok(Catalog {
            books: Arc::new(store.book_repository()),
            authors: Arc::new(store.entity_repository::<Author>()),
            categories: Arc::new(store.entity_repository::<Category>()),
            publishers: Arc::new(store.entity_repository::<Publisher>()),
            countries: Arc::new(store.entity_repository::<Country>()),
            dropdowns: Arc::new(store.dropdown_repository()),
            health: Arc::new(store),
        })
    }

    /// Create an in-memory catalog.
    ///
    /// All handles share the same row stores, so book listings and
    /// dropdowns observe writes made through the entity handles.
    #[cfg(feature = "local-repo")]
    pub fn create_local() -> Catalog {
        tracing::info!("created in-memory catalog store");
        let books = LocalEntityRepository::new();
        let authors = LocalEntityRepository::<Author>::new();
        let categories = LocalEntityRepository::<Category>::new();
        let publishers = LocalEntityRepository::<Publisher>::new();
        let countries = LocalEntityRepository::<Country>::new();

        let book_repo = LocalBookRepository::new(
            books,
            authors.clone(),
            categories.clone(),
            publishers.clone(),
        );
        let dropdowns = LocalDropdownRepository::new(
            countries.clone(),
            authors.clone(),
            publishers.clone(),
            categories.clone(),
        );

        Catalog {
            books: Arc::new(book_repo),
            authors: Arc::new(authors),
            categories: Arc::new(categories),
            publishers: Arc::new(publishers),
            countries: Arc::new(countries),
            dropdowns: Arc::new(dropdowns),
            health: Arc::new(LocalHealth),
        }
    }

    /// Create a catalog from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` to determine which backend to create.
    /// Defaults to Mongo if a connection string is set, otherwise Local.
    ///
    /// # Returns
    /// * `Ok(Catalog)` - Assembled repository handles
    /// * `Err(RepositoryError)` - If creation fails
    pub async fn from_env() -> RepositoryResult<Catalog> {
        let repo_type = RepositoryType::from_env();

        match repo_type {
            RepositoryType::Mongo => {
                let config =
                    MongoConfig::from_env().map_err(RepositoryError::configuration)?;
                Self::create(RepositoryType::Mongo, Some(&config)).await
            }
            RepositoryType::Local => Self::create(RepositoryType::Local, None).await,
        }
    }

    /// Create a catalog from a TOML configuration file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the repository.toml configuration file
    ///
    /// # Returns
    /// * `Ok(Catalog)` - Assembled repository handles
    /// * `Err(RepositoryError)` - If creation fails
    pub async fn from_config_file<P: AsRef<Path>>(config_path: P) -> RepositoryResult<Catalog> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config).await
    }

    /// Create a catalog from the default configuration file location.
    ///
    /// Searches for `repository.toml` in standard locations and creates
    /// the appropriate backend.
    ///
    /// # Returns
    /// * `Ok(Catalog)` - Assembled repository handles
    /// * `Err(RepositoryError)` - If creation fails
    pub async fn from_default_config() -> RepositoryResult<Catalog> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config).await
    }

    /// Create a catalog from a RepositoryConfig instance.
    async fn from_repository_config(config: &RepositoryConfig) -> RepositoryResult<Catalog> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Mongo => {
                let mongo_config = config.to_mongo_config()?.ok_or_else(|| {
                    RepositoryError::configuration(
                        "Mongo repository requires database configuration",
                    )
                })?;
                Self::create(RepositoryType::Mongo, Some(&mongo_config)).await
            }
            RepositoryType::Local => Self::create(RepositoryType::Local, None).await,
        }
    }
}

/// Builder for configuring catalog creation.
///
/// This provides a fluent API for configuring and creating a catalog.
///
/// # Example
/// ```ignore
/// use biblio_data::db::{MongoConfig, RepositoryBuilder, RepositoryType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let catalog = RepositoryBuilder::new()
///         .repository_type(RepositoryType::Mongo)
///         .mongo_config(MongoConfig::from_env()?)
///         .build()
///         .await?;
///
///     Ok(())
/// }
/// ```
pub struct RepositoryBuilder {
    repo_type: RepositoryType,
    mongo_config: Option<MongoConfig>,
}

impl RepositoryBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults to Mongo if a connection string is configured in the
    /// environment, otherwise Local.
    pub fn new() -> Self {
        Self {
            repo_type: RepositoryType::from_env(),
            mongo_config: None,
        }
    }

    /// Set the repository type.
    pub fn repository_type(mut self, repo_type: RepositoryType) -> Self {
        self.repo_type = repo_type;
        self
    }

    /// Set the MongoDB configuration.
    pub fn mongo_config(mut self, config: MongoConfig) -> Self {
        self.mongo_config = Some(config);
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, RepositoryError> {
        self.repo_type = RepositoryType::from_env();

        if self.repo_type == RepositoryType::Mongo {
            let config = MongoConfig::from_env().map_err(RepositoryError::configuration)?;
            self.mongo_config = Some(config);
        }

        Ok(self)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the repository.toml configuration file
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with loaded configuration
    /// * `Err(RepositoryError)` - If file cannot be read or parsed
    pub fn from_config_file<P: AsRef<Path>>(
        mut self,
        config_path: P,
    ) -> Result<Self, RepositoryError> {
        let repo_config = RepositoryConfig::from_file(config_path)?;

        self.repo_type = repo_config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        self.mongo_config = repo_config.to_mongo_config()?;

        Ok(self)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `repository.toml` in standard locations.
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with loaded configuration
    /// * `Err(RepositoryError)` - If no config file found or parse error
    pub fn from_default_config(mut self) -> Result<Self, RepositoryError> {
        let repo_config = RepositoryConfig::from_default_location()?;

        self.repo_type = repo_config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        self.mongo_config = repo_config.to_mongo_config()?;

        Ok(self)
    }

    /// Build the catalog.
    ///
    /// # Returns
    /// * `Ok(Catalog)` - Configured catalog
    /// * `Err(RepositoryError)` - If build fails
    pub async fn build(self) -> RepositoryResult<Catalog> {
        RepositoryFactory::create(self.repo_type, self.mongo_config.as_ref()).await
    }
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
