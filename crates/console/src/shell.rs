//! Routing shell: turns paths into pages or redirects, and builds links.

use std::sync::Arc;

use serde::Serialize;
use useradmin_core::ConsoleError;

use crate::context::AppContext;
use crate::mode::MountMode;
use crate::route::Route;

/// Outcome of a navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Show the page for this route.
    Render(Route),
    /// Replace the current location with `to` (already resolved).
    Redirect { from: Route, to: String },
}

/// Sidebar entry with its resolved link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub href: String,
    pub icon: &'static str,
    pub active: bool,
}

/// Route resolution for one mounted console.
#[derive(Debug, Clone)]
pub struct Shell {
    mode: MountMode,
    context: Arc<AppContext>,
}

impl Shell {
    pub fn new(mode: MountMode, context: Arc<AppContext>) -> Self {
        Self { mode, context }
    }

    pub fn mode(&self) -> MountMode {
        self.mode
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Navigate to a full request path (base path included).
    ///
    /// Paths outside the base path are treated as unmatched.
    pub fn navigate(&self, full_path: &str) -> Navigation {
        match self.context.logical_path(full_path) {
            Some(logical) => self.navigate_logical(logical),
            None => self.settle(Route::NotFound(full_path.to_string())),
        }
    }

    /// Navigate to a logical path (base path already stripped).
    pub fn navigate_logical(&self, logical_path: &str) -> Navigation {
        self.settle(Route::parse(logical_path))
    }

    fn settle(&self, route: Route) -> Navigation {
        if !route.is_transient() {
            return Navigation::Render(route);
        }

        if let Route::NotFound(path) = &route {
            let err = ConsoleError::route_not_matched(path.as_str());
            tracing::info!(mode = %self.mode, error = %err, "redirecting to user list");
        }

        Navigation::Redirect {
            to: self.href(&Route::List),
            from: route,
        }
    }

    /// Resolved link to `route`.
    pub fn href(&self, route: &Route) -> String {
        self.context.resolve_path(&route.logical_path())
    }

    pub fn list_href(&self) -> String {
        self.href(&Route::List)
    }

    /// Sidebar navigation; an item is active when its href equals `current_path`.
    pub fn nav_items(&self, current_path: &str) -> Vec<NavItem> {
        [
            ("All Users", Route::List, "👥"),
            ("Add User", Route::Create, "➕"),
            ("Roles & Permissions", Route::Roles, "🛡️"),
        ]
        .into_iter()
        .map(|(name, route, icon)| {
            let href = self.href(&route);
            NavItem {
                name,
                active: href == current_path,
                href,
                icon,
            }
        })
        .collect()
    }
}
