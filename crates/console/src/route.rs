//! Logical route table.

use useradmin_core::UserId;

pub const ROOT_PATH: &str = "/";
pub const LIST_PATH: &str = "/list";
pub const DETAIL_PATH: &str = "/detail";
pub const CREATE_PATH: &str = "/create";
pub const ROLES_PATH: &str = "/roles";

/// Where a logical path leads.
///
/// `Root` and `NotFound` are transient: the shell redirects both to `List`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    List,
    /// `None` when the path carried no id; the detail page renders "not found".
    Detail(Option<UserId>),
    Create,
    Roles,
    NotFound(String),
}

impl Route {
    /// Classify a logical path (base path already stripped).
    ///
    /// A query string or fragment is ignored, as is one trailing slash.
    pub fn parse(logical_path: &str) -> Route {
        let path = logical_path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        if trimmed.is_empty() || trimmed == ROOT_PATH {
            return Route::Root;
        }

        let Some(rest) = trimmed.strip_prefix('/') else {
            return Route::NotFound(logical_path.to_string());
        };

        let mut segments = rest.split('/');
        let head = segments.next().unwrap_or_default();
        let id = segments.next();
        let extra = segments.next();

        match (head, id, extra) {
            ("list", None, None) => Route::List,
            ("create", None, None) => Route::Create,
            ("roles", None, None) => Route::Roles,
            ("detail", None, None) => Route::Detail(None),
            ("detail", Some(""), None) => Route::Detail(None),
            ("detail", Some(id), None) => Route::Detail(Some(decode_segment(id))),
            _ => Route::NotFound(logical_path.to_string()),
        }
    }

    /// Logical path of the route. `NotFound` echoes the unmatched path.
    pub fn logical_path(&self) -> String {
        match self {
            Route::Root => ROOT_PATH.to_string(),
            Route::List => LIST_PATH.to_string(),
            Route::Detail(Some(id)) => format!("{DETAIL_PATH}/{}", encode_segment(id)),
            Route::Detail(None) => DETAIL_PATH.to_string(),
            Route::Create => CREATE_PATH.to_string(),
            Route::Roles => ROLES_PATH.to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Root and unmatched paths are never rendered.
    pub fn is_transient(&self) -> bool {
        matches!(self, Route::Root | Route::NotFound(_))
    }
}

/// Percent-encode an id for use as one path segment.
pub fn encode_segment(id: &UserId) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

/// A segment that is not valid UTF-8 once decoded is kept as written.
fn decode_segment(segment: &str) -> UserId {
    match urlencoding::decode(segment) {
        Ok(decoded) => UserId::new(decoded.into_owned()),
        Err(_) => UserId::new(segment),
    }
}
