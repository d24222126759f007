use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use minijinja::context;
use useradmin_console::pages::DetailView;
use useradmin_console::route::DETAIL_PATH;
use useradmin_console::Route;
use useradmin_core::UserId;

use crate::app::errors::AppError;
use crate::app::views::DetailPageView;
use crate::context::ConsoleContext;

pub fn router() -> Router {
    Router::new()
        .route(DETAIL_PATH, get(missing_user))
        .route("/detail/:id", get(show_user))
}

pub async fn show_user(console: ConsoleContext, Path(id): Path<String>) -> Result<Response, AppError> {
    render(&console, Some(UserId::new(id)))
}

pub async fn missing_user(console: ConsoleContext) -> Result<Response, AppError> {
    render(&console, None)
}

fn render(console: &ConsoleContext, id: Option<UserId>) -> Result<Response, AppError> {
    let shell = console.shell();
    let current_path = shell.href(&Route::Detail(id.clone()));
    let list_href = shell.list_href();

    match DetailView::load(console.mount().repository(), id.as_ref()) {
        DetailView::Found(detail) => {
            let view = DetailPageView::new(&detail, shell);
            let html = console.render(
                "detail.html",
                &current_path,
                &detail.user.name,
                context! { detail => view, list_href => list_href },
            )?;
            Ok(html.into_response())
        }
        DetailView::NotFound { requested } => {
            let html: Html<String> = console.render(
                "detail_not_found.html",
                &current_path,
                "User Not Found",
                context! {
                    requested => requested.as_ref().map(UserId::as_str),
                    list_href => list_href,
                },
            )?;
            Ok((StatusCode::NOT_FOUND, html).into_response())
        }
    }
}
