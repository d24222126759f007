//! Per-mount shared context: base path + host-supplied identity.

use useradmin_core::{ConsoleError, ConsoleResult, User};

/// Context shared by every page of one mounted console.
///
/// Built once when the console is mounted and never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppContext {
    base_path: String,
    current_user: Option<User>,
}

impl AppContext {
    pub fn new(base_path: impl Into<String>, current_user: Option<User>) -> Self {
        Self {
            base_path: base_path.into(),
            current_user,
        }
    }

    /// Context of a console that owns the whole URL space.
    pub fn standalone() -> Self {
        Self::default()
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The host's signed-in user (not one of the administered users).
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// `base_path + logical_path`, verbatim. Duplicate slashes are kept.
    pub fn resolve_path(&self, logical_path: &str) -> String {
        format!("{}{}", self.base_path, logical_path)
    }

    /// Inverse of [`resolve_path`](Self::resolve_path) for request paths.
    ///
    /// Returns `None` when `full_path` lies outside the base path. The bare
    /// base path maps to the root (`"/"`).
    pub fn logical_path<'a>(&self, full_path: &'a str) -> Option<&'a str> {
        let rest = full_path.strip_prefix(self.base_path.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

/// Demand a mounted context (an [`AppContext`] or a front end's wrapper
/// around one), failing loudly when the caller runs outside a mount.
pub fn require<C>(context: Option<C>) -> ConsoleResult<C> {
    context.ok_or_else(|| {
        tracing::error!("application context consumed outside of a mount");
        ConsoleError::ContextUnavailable
    })
}
