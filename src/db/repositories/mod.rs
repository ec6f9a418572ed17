//! Repository implementations module.
//!
//! This module contains different implementations of the repository traits:
//! - `mongo`: MongoDB implementation using the official driver
//! - `local`: In-memory implementation for unit testing and local development
#[cfg(feature = "local-repo")]
pub mod local;
#[cfg(feature = "mongo-repo")]
pub mod mongo;

#[cfg(all(test, feature = "local-repo"))]
#[path = "local_tests.rs"]
mod local_tests;

#[cfg(feature = "local-repo")]
pub use local::{
    LocalBookRepository, LocalDropdownRepository, LocalEntityRepository, LocalHealth,
};
#[cfg(feature = "mongo-repo")]
pub use mongo::{
    MongoBookRepository, MongoCatalog, MongoDropdownRepository, MongoEntityRepository,
};
