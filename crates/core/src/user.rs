//! Administered user records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Entity, UserId};

// ─────────────────────────────────────────────────────────────────────────────
// User Role
// ─────────────────────────────────────────────────────────────────────────────

/// Coarse role assigned to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    Viewer,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::User, UserRole::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Viewer => "viewer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
            UserRole::Viewer => "Viewer",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            UserRole::Admin => "badge-primary",
            UserRole::User => "badge-secondary",
            UserRole::Viewer => "badge-outline",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            UserRole::Admin => "👑",
            UserRole::User => "👤",
            UserRole::Viewer => "👁️",
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User Status
// ─────────────────────────────────────────────────────────────────────────────

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub const ALL: [UserStatus; 2] = [UserStatus::Active, UserStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            UserStatus::Active => "badge-success",
            UserStatus::Inactive => "badge-danger",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

impl core::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User
// ─────────────────────────────────────────────────────────────────────────────

/// A user as seen by the administration console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// First letter of every name part ("John Smith" -> "JS").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
