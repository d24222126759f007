//! Roles page: permission matrix and quick stats, derived from static data.

use std::collections::HashMap;

use serde::Serialize;
use useradmin_core::{Permission, Role, RoleId};
use useradmin_infra::UserRepository;

/// Permissions shown as matrix rows, in display order.
pub const CANONICAL_PERMISSIONS: [Permission; 13] = [
    Permission::from_static("users.create"),
    Permission::from_static("users.read"),
    Permission::from_static("users.update"),
    Permission::from_static("users.delete"),
    Permission::from_static("products.create"),
    Permission::from_static("products.read"),
    Permission::from_static("products.update"),
    Permission::from_static("products.delete"),
    Permission::from_static("orders.create"),
    Permission::from_static("orders.read"),
    Permission::from_static("orders.update"),
    Permission::from_static("orders.delete"),
    Permission::from_static("analytics.read"),
];

/// Explicit `(role, permission) -> granted` table over a cross product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionMatrix {
    roles: Vec<RoleId>,
    permissions: Vec<Permission>,
    cells: HashMap<(RoleId, Permission), bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub permission: Permission,
    pub label: String,
    /// One cell per role, in role order.
    pub cells: Vec<bool>,
}

impl PermissionMatrix {
    pub fn derive(roles: &[Role], permissions: &[Permission]) -> Self {
        let cells = roles
            .iter()
            .flat_map(|role| {
                permissions.iter().map(move |permission| {
                    ((role.id.clone(), permission.clone()), role.grants(permission))
                })
            })
            .collect();

        Self {
            roles: roles.iter().map(|r| r.id.clone()).collect(),
            permissions: permissions.to_vec(),
            cells,
        }
    }

    /// Pairs outside the derived cross product are not granted.
    pub fn allows(&self, role: &RoleId, permission: &Permission) -> bool {
        self.cells
            .get(&(role.clone(), permission.clone()))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> Vec<MatrixRow> {
        self.permissions
            .iter()
            .map(|permission| MatrixRow {
                label: permission.label(),
                cells: self
                    .roles
                    .iter()
                    .map(|role| self.allows(role, permission))
                    .collect(),
                permission: permission.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleStats {
    pub total_roles: usize,
    pub total_permissions: usize,
    /// Sum of the denormalized `user_count` of every role.
    pub active_users: u32,
    pub admin_users: u32,
}

impl RoleStats {
    pub fn derive(roles: &[Role], permissions: &[Permission]) -> Self {
        Self {
            total_roles: roles.len(),
            total_permissions: permissions.len(),
            active_users: roles.iter().map(|r| r.user_count).sum(),
            admin_users: roles
                .iter()
                .find(|r| r.name == "Admin")
                .map(|r| r.user_count)
                .unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolesView {
    pub roles: Vec<Role>,
    pub matrix: PermissionMatrix,
    pub stats: RoleStats,
}

impl RolesView {
    pub fn load(repository: &dyn UserRepository) -> Self {
        Self::derive(repository.roles(), &CANONICAL_PERMISSIONS)
    }

    pub fn derive(roles: Vec<Role>, permissions: &[Permission]) -> Self {
        Self {
            matrix: PermissionMatrix::derive(&roles, permissions),
            stats: RoleStats::derive(&roles, permissions),
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use useradmin_infra::InMemoryRepository;

    fn roles() -> Vec<Role> {
        InMemoryRepository::seeded().roles()
    }

    fn assert_matches_source(roles: &[Role], permissions: &[Permission]) {
        let matrix = PermissionMatrix::derive(roles, permissions);
        assert_eq!(matrix.len(), roles.len() * permissions.len());
        for role in roles {
            for permission in permissions {
                assert_eq!(
                    matrix.allows(&role.id, permission),
                    role.permissions.contains(permission),
                    "{} / {}",
                    role.name,
                    permission
                );
            }
        }
    }

    #[test]
    fn every_cell_matches_role_permissions() {
        assert_matches_source(&roles(), &CANONICAL_PERMISSIONS);
    }

    #[test]
    fn added_roles_and_permissions_are_derived_too() {
        let mut roles = roles();
        roles.push(Role {
            id: RoleId::new("4"),
            name: "Auditor".to_string(),
            description: "Reads audit trails".to_string(),
            permissions: vec![Permission::from_static("audit.read"), Permission::from_static("users.read")],
            user_count: 0,
        });
        let mut permissions = CANONICAL_PERMISSIONS.to_vec();
        permissions.push(Permission::from_static("audit.read"));

        assert_matches_source(&roles, &permissions);
        let matrix = PermissionMatrix::derive(&roles, &permissions);
        assert!(matrix.allows(&RoleId::new("4"), &Permission::from_static("audit.read")));
        assert!(!matrix.allows(&RoleId::new("1"), &Permission::from_static("audit.read")));
    }

    #[test]
    fn rows_follow_permission_then_role_order() {
        let view = RolesView::derive(roles(), &CANONICAL_PERMISSIONS);
        let rows = view.matrix.rows();
        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0].label, "Create Users");
        assert_eq!(rows[0].cells, [true, false, false]);
        assert_eq!(rows[5].permission.as_str(), "products.read");
        assert_eq!(rows[5].cells, [true, true, true]);
    }

    #[test]
    fn unknown_pairs_are_denied() {
        let matrix = PermissionMatrix::derive(&roles(), &CANONICAL_PERMISSIONS);
        assert!(!matrix.allows(&RoleId::new("9"), &Permission::from_static("users.read")));
        // Granted to "User" but not part of the canonical rows.
        assert!(!matrix.allows(&RoleId::new("2"), &Permission::from_static("profile.update")));
    }

    #[test]
    fn quick_stats_use_denormalized_counts() {
        let stats = RoleStats::derive(&roles(), &CANONICAL_PERMISSIONS);
        assert_eq!(
            stats,
            RoleStats {
                total_roles: 3,
                total_permissions: 13,
                active_users: 8,
                admin_users: 2,
            }
        );
    }
}
