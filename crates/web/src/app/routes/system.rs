use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use useradmin_console::Navigation;

use crate::context::ConsoleContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Root and fallback handler: let the shell decide where the path leads.
///
/// A path that names a page but reached the fallback anyway (a trailing
/// slash, say) is redirected to the page's canonical link.
pub async fn navigate(console: ConsoleContext, OriginalUri(uri): OriginalUri) -> Response {
    let shell = console.shell();
    let path = uri.path();

    let target = match shell.navigate(path) {
        Navigation::Redirect { to, .. } => to,
        Navigation::Render(route) => {
            let canonical = shell.href(&route);
            if canonical == path {
                shell.list_href()
            } else {
                match uri.query() {
                    Some(query) => format!("{canonical}?{query}"),
                    None => canonical,
                }
            }
        }
    };

    tracing::info!(from = %path, to = %target, "redirect");
    Redirect::to(&target).into_response()
}
