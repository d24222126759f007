use std::path::Path;

use serde::{Deserialize, Serialize};
use useradmin_core::{ActivityItem, Role, User};

use super::{RepositoryError, UserRepository, seed};

/// Fixed in-memory data set (mock data for demos and tests).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryRepository {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    roles: Vec<Role>,
    #[serde(default)]
    activity: Vec<ActivityItem>,
}

impl InMemoryRepository {
    pub fn new(users: Vec<User>, roles: Vec<Role>, activity: Vec<ActivityItem>) -> Self {
        Self {
            users,
            roles,
            activity,
        }
    }

    /// The built-in mock data set.
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::roles(), seed::activity())
    }

    /// Parse a fixture of the shape `{"users": [...], "roles": [...], "activity": [...]}`.
    ///
    /// Missing sections are empty.
    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RepositoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let repo = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            users = repo.users.len(),
            roles = repo.roles.len(),
            activity = repo.activity.len(),
            "loaded repository fixture"
        );
        Ok(repo)
    }
}

impl UserRepository for InMemoryRepository {
    fn users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn roles(&self) -> Vec<Role> {
        self.roles.clone()
    }

    fn activity(&self) -> Vec<ActivityItem> {
        self.activity.clone()
    }
}
