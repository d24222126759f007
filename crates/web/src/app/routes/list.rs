use axum::{
    extract::{Path, Query, RawQuery},
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use minijinja::context;
use serde::Deserialize;
use useradmin_console::pages::create::CREATED_NOTICE;
use useradmin_console::pages::UserFilter;
use useradmin_console::route::{CREATE_PATH, LIST_PATH};
use useradmin_console::Route;
use useradmin_core::UserId;

use crate::app::errors::AppError;
use crate::app::views::{FilterButton, UserRow};
use crate::context::ConsoleContext;

pub fn router() -> Router {
    Router::new()
        .route(LIST_PATH, get(list_users))
        .route("/list/:id/toggle", post(toggle_status))
}

/// Query string of the list page.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub role: Option<String>,
    pub status: Option<String>,
    pub q: Option<String>,
    /// `created` after a successful create.
    pub notice: Option<String>,
}

impl ListQuery {
    pub fn filter(&self) -> UserFilter {
        UserFilter {
            role: self.role.clone(),
            status: self.status.clone(),
            search: self.q.clone(),
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self.notice.as_deref() {
            Some("created") => Some(CREATED_NOTICE),
            _ => None,
        }
    }
}

pub async fn list_users(
    console: ConsoleContext,
    Query(query): Query<ListQuery>,
    RawQuery(raw): RawQuery,
) -> Result<Html<String>, AppError> {
    let filter = query.filter();
    let shell = console.shell();
    let return_query = filter_query(raw.as_deref());

    let page = console.mount().with_list(|list| {
        let users: Vec<UserRow> = list
            .list_users(&filter)
            .iter()
            .map(|user| UserRow::new(user, shell))
            .collect();
        tracing::debug!(shown = users.len(), total = list.users().len(), "user list");

        context! {
            users => users,
            total => list.users().len(),
            role_options => FilterButton::from_options(list.role_options(), filter.role_value()),
            status_options => FilterButton::from_options(list.status_options(), filter.status_value()),
            search => filter.search_text(),
            filtered => !filter.is_unrestricted(),
            notice => query.notice(),
            clear_href => shell.list_href(),
            create_href => shell.context().resolve_path(CREATE_PATH),
            return_query => return_query,
        }
    });

    console.render("list.html", &shell.href(&Route::List), "All Users", page)
}

/// Flip a user's status on the page's local copy and go back to the list,
/// keeping the active filters. Unknown ids change nothing.
pub async fn toggle_status(
    console: ConsoleContext,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Redirect {
    let id = UserId::new(id);
    match console.mount().with_list(|list| list.toggle_status(&id)) {
        Some(status) => tracing::info!(user_id = %id, status = %status, "user status toggled"),
        None => tracing::debug!(user_id = %id, "toggle ignored for unknown user"),
    }

    let mut to = console.shell().list_href();
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        to.push('?');
        to.push_str(&query);
    }
    Redirect::to(&to)
}

/// The raw query minus the one-shot `notice`, as a `?`-prefixed suffix, so a
/// toggle can send the user back to the same filtered list.
fn filter_query(raw: Option<&str>) -> String {
    let kept: Vec<&str> = raw
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty() && *pair != "notice" && !pair.starts_with("notice="))
        .collect();

    if kept.is_empty() {
        String::new()
    } else {
        format!("?{}", kept.join("&"))
    }
}
