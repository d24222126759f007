//! Infrastructure layer: the data sources behind the console.

pub mod repository;

pub use repository::{InMemoryRepository, RepositoryError, UserRepository};
