//! User detail: record lookup, activity feed and the role summary.

use serde::Serialize;
use useradmin_core::{
    ActivityItem, ConsoleError, ConsoleResult, Permission, Role, User, UserId, entity,
};
use useradmin_infra::UserRepository;

/// Checklist shown under "Role Permissions".
const CAPABILITIES: [(&str, &str); 6] = [
    ("Create Users", "users.create"),
    ("Edit Users", "users.update"),
    ("View Products", "products.read"),
    ("Create Orders", "orders.create"),
    ("View Orders", "orders.read"),
    ("View Analytics", "analytics.read"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub name: &'static str,
    pub permission: Permission,
    pub allowed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetail {
    pub user: User,
    pub activity: Vec<ActivityItem>,
    /// Role record named like the user's role, if the repository has one.
    pub role: Option<Role>,
    pub capabilities: Vec<Capability>,
}

/// What the detail page shows. "Not found" is a normal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Found(Box<UserDetail>),
    NotFound { requested: Option<UserId> },
}

pub fn load_user(repository: &dyn UserRepository, id: &UserId) -> ConsoleResult<User> {
    let users = repository.users();
    entity::find_by_id(&users, id)
        .cloned()
        .ok_or_else(|| ConsoleError::not_found("user", id.as_str()))
}

/// Activity entries of `user_id`, in repository order.
pub fn load_activity(repository: &dyn UserRepository, user_id: &UserId) -> Vec<ActivityItem> {
    repository
        .activity()
        .into_iter()
        .filter(|item| &item.user_id == user_id)
        .collect()
}

fn capabilities(role: Option<&Role>) -> Vec<Capability> {
    CAPABILITIES
        .iter()
        .map(|&(name, permission)| {
            let permission = Permission::from_static(permission);
            Capability {
                name,
                allowed: role.is_some_and(|r| r.grants(&permission)),
                permission,
            }
        })
        .collect()
}

impl DetailView {
    pub fn load(repository: &dyn UserRepository, id: Option<&UserId>) -> Self {
        let Some(id) = id else {
            return DetailView::NotFound { requested: None };
        };

        let user = match load_user(repository, id) {
            Ok(user) => user,
            Err(err) => {
                tracing::debug!(error = %err, "rendering user-not-found state");
                return DetailView::NotFound {
                    requested: Some(id.clone()),
                };
            }
        };

        let role = repository
            .roles()
            .into_iter()
            .find(|r| r.is_named(user.role.as_str()));
        let activity = load_activity(repository, &user.id);

        DetailView::Found(Box::new(UserDetail {
            capabilities: capabilities(role.as_ref()),
            user,
            activity,
            role,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use useradmin_infra::InMemoryRepository;

    fn repo() -> InMemoryRepository {
        InMemoryRepository::seeded()
    }

    #[test]
    fn load_user_reports_record_not_found() {
        let err = load_user(&repo(), &UserId::new("99")).unwrap_err();
        assert_eq!(err, ConsoleError::not_found("user", "99"));
    }

    #[test]
    fn activity_is_filtered_by_exact_user_id() {
        let items = load_activity(&repo(), &UserId::new("1"));
        let ids: Vec<_> = items.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["1", "6"]);
        assert!(load_activity(&repo(), &UserId::new("4")).is_empty());
    }

    #[test]
    fn unknown_or_missing_id_renders_not_found() {
        assert_eq!(
            DetailView::load(&repo(), Some(&UserId::new("nope"))),
            DetailView::NotFound {
                requested: Some(UserId::new("nope"))
            }
        );
        assert_eq!(DetailView::load(&repo(), None), DetailView::NotFound { requested: None });
    }

    #[test]
    fn found_view_carries_role_and_capabilities() {
        let DetailView::Found(detail) = DetailView::load(&repo(), Some(&UserId::new("7"))) else {
            panic!("expected user 7 to exist");
        };

        assert_eq!(detail.user.name, "Robert Taylor");
        assert_eq!(detail.role.as_ref().map(|r| r.name.as_str()), Some("Viewer"));

        let allowed: Vec<_> = detail
            .capabilities
            .iter()
            .filter(|c| c.allowed)
            .map(|c| c.name)
            .collect();
        assert_eq!(allowed, ["View Products", "View Orders"]);
    }

    #[test]
    fn admin_has_every_capability() {
        let DetailView::Found(detail) = DetailView::load(&repo(), Some(&UserId::new("5"))) else {
            panic!("expected user 5 to exist");
        };
        assert!(detail.capabilities.iter().all(|c| c.allowed));
    }

    #[test]
    fn missing_role_record_denies_everything() {
        let mut users = repo().users();
        users.truncate(1);
        let repo = InMemoryRepository::new(users, Vec::new(), Vec::new());

        let DetailView::Found(detail) = DetailView::load(&repo, Some(&UserId::new("1"))) else {
            panic!("expected user 1 to exist");
        };
        assert!(detail.role.is_none());
        assert!(detail.capabilities.iter().all(|c| !c.allowed));
    }
}
