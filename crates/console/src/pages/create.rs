//! Create-user form: required-field validation and simulated submission.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use useradmin_core::{ConsoleError, ConsoleResult, User, UserId, UserRole, UserStatus};

use crate::context::AppContext;
use crate::route::Route;

pub const MISSING_FIELDS_ALERT: &str = "Please fill in all required fields";
pub const CREATED_NOTICE: &str = "User created successfully!";

/// Capabilities listed in the role preview, in display order.
pub const PREVIEW_CAPABILITIES: [&str; 6] = [
    "View Products",
    "Create/Edit Products",
    "View Orders",
    "Create Orders",
    "Manage Users",
    "View Analytics",
];

/// Explicit `(role, capability) → granted` table behind the preview. It is a
/// fixed summary and does not follow the repository's role records.
const PREVIEW_GRANTS: [(UserRole, &str, bool); 18] = [
    (UserRole::Admin, "View Products", true),
    (UserRole::Admin, "Create/Edit Products", true),
    (UserRole::Admin, "View Orders", true),
    (UserRole::Admin, "Create Orders", true),
    (UserRole::Admin, "Manage Users", true),
    (UserRole::Admin, "View Analytics", true),
    (UserRole::User, "View Products", true),
    (UserRole::User, "Create/Edit Products", false),
    (UserRole::User, "View Orders", true),
    (UserRole::User, "Create Orders", true),
    (UserRole::User, "Manage Users", false),
    (UserRole::User, "View Analytics", false),
    (UserRole::Viewer, "View Products", true),
    (UserRole::Viewer, "Create/Edit Products", false),
    (UserRole::Viewer, "View Orders", true),
    (UserRole::Viewer, "Create Orders", false),
    (UserRole::Viewer, "Manage Users", false),
    (UserRole::Viewer, "View Analytics", false),
];

/// Whether `role` is shown as holding `capability`. Unknown capabilities are not granted.
pub fn preview_grants(role: UserRole, capability: &str) -> bool {
    PREVIEW_GRANTS
        .iter()
        .find(|(r, name, _)| *r == role && *name == capability)
        .is_some_and(|&(_, _, granted)| granted)
}

fn role_summary(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "Full system access with all permissions",
        UserRole::User => "Standard user with limited permissions",
        UserRole::Viewer => "Read-only access to basic information",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub name: &'static str,
    pub allowed: bool,
}

/// What the selected role would be allowed to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolePreview {
    pub role: UserRole,
    pub label: &'static str,
    pub glyph: &'static str,
    pub summary: &'static str,
    pub rows: Vec<PreviewRow>,
}

impl RolePreview {
    pub fn for_role(role: UserRole) -> Self {
        Self {
            role,
            label: role.label(),
            glyph: role.glyph(),
            summary: role_summary(role),
            rows: PREVIEW_CAPABILITIES
                .iter()
                .map(|&name| PreviewRow {
                    name,
                    allowed: preview_grants(role, name),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub status: UserStatus,
}

/// Result of a successful submission. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub user: User,
    /// Resolved list path to navigate to.
    pub redirect_to: String,
}

impl CreateForm {
    /// Name and email must be non-empty after trimming. Name is checked first.
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConsoleError::missing_field("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ConsoleError::missing_field("email"));
        }
        Ok(())
    }

    /// Preview of the currently selected role.
    pub fn preview(&self) -> RolePreview {
        RolePreview::for_role(self.role)
    }

    /// The record a real backend would store.
    pub fn build_user(&self, id: UserId, now: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role,
            status: self.status,
            last_login: now,
            created_at: now,
            avatar: None,
        }
    }

    pub fn submit(&self, context: &AppContext, now: DateTime<Utc>) -> ConsoleResult<Submission> {
        self.validate()?;

        let user = self.build_user(UserId::generate(), now);
        tracing::info!(
            user_id = %user.id,
            role = %user.role,
            status = %user.status,
            "user created (not persisted)"
        );

        Ok(Submission {
            user,
            redirect_to: context.resolve_path(&Route::List.logical_path()),
        })
    }
}
