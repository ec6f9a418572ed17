//! # Biblio Data
//!
//! Data access layer for a library catalog stored in MongoDB.
//!
//! This crate provides typed repositories over the catalog's five entity
//! families (books, authors, categories, publishers, countries), the
//! denormalized book listing used by list views, and the option lists
//! that back form dropdowns. Storage is pluggable: a MongoDB backend for
//! production and an in-memory backend for unit testing and local
//! development share one trait surface.
//!
//! ## Features
//!
//! - **Generic CRUD**: one repository implementation per backend serves
//!   every entity through the [`db::CatalogEntity`] binding
//! - **Atomic updates**: replace-if-present in a single conditional
//!   write, no read-modify-write window
//! - **Server-side joins**: book listings resolve author, category and
//!   publisher names in one aggregation round trip
//! - **Outer-join listings**: books with dangling references stay
//!   visible, with absent names reported as `None`
//! - **Configuration**: TOML file or environment variables, with
//!   per-collection name overrides
//!
//! ## Architecture
//!
//! The crate is organized into two logical modules:
//!
//! - [`models`]: Catalog entities, typed identifiers and read models
//! - [`db`]: Repository traits, backends, factory and configuration
//!
//! ## Getting Started
//!
//! ```ignore
//! use biblio_data::db::RepositoryFactory;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = RepositoryFactory::from_env().await?;
//!
//!     for listing in catalog.books.get_listings().await? {
//!         println!("{} ({})", listing.title, listing.author_name.as_deref().unwrap_or("unknown"));
//!     }
//!     Ok(())
//! }
//! ```

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod db;
pub mod models;
