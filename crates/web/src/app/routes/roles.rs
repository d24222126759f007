use axum::{response::Html, routing::get, Router};
use minijinja::{context, Value};
use useradmin_console::pages::RolesView;
use useradmin_console::route::ROLES_PATH;
use useradmin_console::Route;

use crate::app::errors::AppError;
use crate::app::views::RolesPageView;
use crate::context::ConsoleContext;

pub fn router() -> Router {
    Router::new().route(ROLES_PATH, get(show_roles))
}

pub async fn show_roles(console: ConsoleContext) -> Result<Html<String>, AppError> {
    let view = RolesView::load(console.mount().repository());
    tracing::debug!(roles = view.roles.len(), cells = view.matrix.len(), "roles page");

    let page = RolesPageView::from(&view);
    console.render(
        "roles.html",
        &console.shell().href(&Route::Roles),
        "Roles & Permissions",
        context! { roles => Value::from_serialize(&page) },
    )
}
