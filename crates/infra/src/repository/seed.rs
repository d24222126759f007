//! Built-in mock data set.

use chrono::{DateTime, NaiveDate, Utc};
use useradmin_core::{
    ActivityId, ActivityItem, Permission, Role, RoleId, User, UserId, UserRole, UserStatus,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    status: UserStatus,
    last_login: DateTime<Utc>,
    created_at: DateTime<Utc>,
    avatar: Option<&str>,
) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_login,
        created_at,
        avatar: avatar.map(str::to_string),
    }
}

pub fn users() -> Vec<User> {
    use UserRole::{Admin, User as Member, Viewer};
    use UserStatus::{Active, Inactive};

    vec![
        user(
            "1",
            "John Smith",
            "john.smith@company.com",
            Admin,
            Active,
            at(2024, 1, 25, 14, 30),
            at(2023, 6, 15, 9, 0),
            Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e"),
        ),
        user(
            "2",
            "Sarah Johnson",
            "sarah.johnson@company.com",
            Member,
            Active,
            at(2024, 1, 24, 16, 45),
            at(2023, 8, 22, 10, 30),
            Some("https://images.unsplash.com/photo-1494790108755-2616b332a7dd"),
        ),
        user(
            "3",
            "Mike Davis",
            "mike.davis@company.com",
            Member,
            Active,
            at(2024, 1, 25, 8, 15),
            at(2023, 9, 10, 14, 20),
            Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d"),
        ),
        user(
            "4",
            "Emily Brown",
            "emily.brown@company.com",
            Viewer,
            Inactive,
            at(2024, 1, 20, 11, 30),
            at(2023, 11, 5, 13, 45),
            Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80"),
        ),
        user(
            "5",
            "David Wilson",
            "david.wilson@company.com",
            Admin,
            Active,
            at(2024, 1, 25, 12, 0),
            at(2023, 5, 30, 16, 15),
            Some("https://images.unsplash.com/photo-1500648767791-00dcc994a43e"),
        ),
        user(
            "6",
            "Lisa Anderson",
            "lisa.anderson@company.com",
            Member,
            Active,
            at(2024, 1, 23, 9, 45),
            at(2023, 10, 12, 11, 0),
            Some("https://images.unsplash.com/photo-1544005313-94ddf0286df2"),
        ),
        user(
            "7",
            "Robert Taylor",
            "robert.taylor@company.com",
            Viewer,
            Active,
            at(2024, 1, 24, 15, 20),
            at(2023, 12, 1, 10, 0),
            None,
        ),
        user(
            "8",
            "Jennifer Lee",
            "jennifer.lee@company.com",
            Member,
            Inactive,
            at(2024, 1, 10, 14, 30),
            at(2023, 7, 15, 12, 30),
            None,
        ),
    ]
}

fn role(id: &str, name: &str, description: &str, permissions: &[&'static str], user_count: u32) -> Role {
    Role {
        id: RoleId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        permissions: permissions.iter().copied().map(Permission::from_static).collect(),
        user_count,
    }
}

pub fn roles() -> Vec<Role> {
    vec![
        role(
            "1",
            "Admin",
            "Full system access with all permissions",
            &[
                "users.create",
                "users.read",
                "users.update",
                "users.delete",
                "products.create",
                "products.read",
                "products.update",
                "products.delete",
                "orders.create",
                "orders.read",
                "orders.update",
                "orders.delete",
                "analytics.read",
            ],
            2,
        ),
        role(
            "2",
            "User",
            "Standard user with limited permissions",
            &["products.read", "orders.read", "orders.create", "profile.update"],
            4,
        ),
        role(
            "3",
            "Viewer",
            "Read-only access to basic information",
            &["products.read", "orders.read", "profile.read"],
            2,
        ),
    ]
}

fn entry(
    id: &str,
    user_id: &str,
    action: &str,
    description: &str,
    timestamp: DateTime<Utc>,
    icon: &str,
) -> ActivityItem {
    ActivityItem {
        id: ActivityId::new(id),
        user_id: UserId::new(user_id),
        action: action.to_string(),
        description: description.to_string(),
        timestamp,
        icon: icon.to_string(),
    }
}

pub fn activity() -> Vec<ActivityItem> {
    vec![
        entry("1", "1", "login", "John Smith logged in to the system", at(2024, 1, 25, 14, 30), "🔐"),
        entry(
            "2",
            "2",
            "profile_update",
            "Sarah Johnson updated her profile information",
            at(2024, 1, 24, 16, 45),
            "✏️",
        ),
        entry("3", "3", "order_created", "Mike Davis created a new order", at(2024, 1, 25, 8, 15), "🛒"),
        entry(
            "4",
            "5",
            "user_created",
            "David Wilson created a new user account",
            at(2024, 1, 25, 12, 0),
            "👤",
        ),
        entry(
            "5",
            "6",
            "password_change",
            "Lisa Anderson changed her password",
            at(2024, 1, 23, 9, 45),
            "🔑",
        ),
        entry(
            "6",
            "1",
            "role_updated",
            "John Smith updated user roles and permissions",
            at(2024, 1, 22, 11, 20),
            "🛡️",
        ),
    ]
}
