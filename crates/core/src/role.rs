use serde::{Deserialize, Serialize};

use crate::{Permission, RoleId};

/// A named bundle of permissions.
///
/// `user_count` is denormalized mock data and is never recomputed from user
/// records, so it can disagree with the actual tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: String,
    pub permissions: Vec<Permission>,
    pub user_count: u32,
}

impl Role {
    pub fn grants(&self, permission: &Permission) -> bool {
        self.permissions.contains(permission)
    }

    /// Case-insensitive match against a role name ("Admin" matches `admin`).
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn glyph(&self) -> &'static str {
        if self.is_named("admin") {
            "👑"
        } else if self.is_named("user") {
            "👤"
        } else {
            "👁️"
        }
    }
}

