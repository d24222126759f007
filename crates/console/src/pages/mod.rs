//! Page models. Each page reads the repository on its own and keeps its own
//! local state; pages share nothing but the mount's context.

pub mod create;
pub mod detail;
pub mod list;
pub mod roles;

pub use create::{CreateForm, RolePreview, Submission};
pub use detail::{Capability, DetailView, UserDetail};
pub use list::{FilterOption, ListPage, UserFilter};
pub use roles::{PermissionMatrix, RoleStats, RolesView};
