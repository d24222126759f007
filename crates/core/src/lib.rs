//! `useradmin-core`: domain records shared by every console crate.
//!
//! This crate contains **pure domain** types (no HTTP, no storage).

pub mod activity;
pub mod entity;
pub mod error;
pub mod id;
pub mod permission;
pub mod role;
pub mod user;

pub use activity::ActivityItem;
pub use entity::Entity;
pub use error::{ConsoleError, ConsoleResult};
pub use id::{ActivityId, RoleId, UserId};
pub use permission::Permission;
pub use role::Role;
pub use user::{User, UserRole, UserStatus};
