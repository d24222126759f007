//! Read-only repository of users, roles and activity.
//!
//! The console never writes back: status toggles and created users live in the
//! page models of a mounted instance and are lost on restart.

use std::sync::Arc;

use thiserror::Error;
use useradmin_core::{ActivityItem, Role, User};

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryRepository;

/// Source of the records administered by the console.
///
/// Calls are synchronous and unpaginated; every call returns the records in
/// the repository's native order.
pub trait UserRepository: Send + Sync {
    fn users(&self) -> Vec<User>;
    fn roles(&self) -> Vec<Role>;
    fn activity(&self) -> Vec<ActivityItem>;
}

impl<R> UserRepository for Arc<R>
where
    R: UserRepository + ?Sized,
{
    fn users(&self) -> Vec<User> {
        (**self).users()
    }

    fn roles(&self) -> Vec<Role> {
        (**self).roles()
    }

    fn activity(&self) -> Vec<ActivityItem> {
        (**self).activity()
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid fixture json: {0}")]
    Json(#[from] serde_json::Error),
}
