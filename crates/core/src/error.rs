//! Console error model.

use thiserror::Error;

/// Result type used across the console crates.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Console-level error.
///
/// Only `ContextUnavailable` is fatal. The other variants are recovered at the
/// page boundary and turned into rendered states (alert, "not found" panel,
/// redirect).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// A required form field was empty after trimming.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A record lookup by id found nothing.
    #[error("{kind} not found: {id}")]
    RecordNotFound { kind: &'static str, id: String },

    /// A path matched none of the logical routes.
    #[error("no route matches {0:?}")]
    RouteNotMatched(String),

    /// The application context was consumed outside of an active mount.
    #[error("application context is unavailable outside of a mount")]
    ContextUnavailable,
}

impl ConsoleError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingRequiredField(field)
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::RecordNotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn route_not_matched(path: impl Into<String>) -> Self {
        Self::RouteNotMatched(path.into())
    }

    /// Whether the error must abort rendering instead of being shown as a page state.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ContextUnavailable)
    }
}
