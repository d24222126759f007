//! `useradmin-console`: headless state and routing core of the console.
//!
//! Nothing here knows about HTTP or HTML. A front end (see `useradmin-web`)
//! builds a [`Mount`] once, then asks its [`Shell`] where a path leads and
//! asks the page models what to show.

pub mod context;
pub mod mode;
pub mod mount;
pub mod pages;
pub mod route;
pub mod shell;

pub use context::AppContext;
pub use mode::MountMode;
pub use mount::{HostProps, Mount};
pub use route::Route;
pub use shell::{NavItem, Navigation, Shell};
