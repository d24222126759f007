//! Demo host: a landing page that links into the embedded console.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};
use minijinja::context;
use useradmin_console::{Mount, Route};

use crate::app::errors::AppError;
use crate::app::views::{CurrentUserView, Views};

#[derive(Clone)]
struct HostState {
    views: Arc<Views>,
    console_href: String,
    signed_in: Option<Arc<CurrentUserView>>,
}

pub fn router(mount: &Mount) -> Router {
    let state = HostState {
        views: Arc::new(Views::new()),
        console_href: mount.shell().href(&Route::List),
        signed_in: mount.context().current_user().map(|user| {
            Arc::new(CurrentUserView {
                name: user.name.clone(),
                email: user.email.clone(),
                initials: user.initials(),
            })
        }),
    };

    Router::new().route("/", get(home)).with_state(state)
}

async fn home(State(host): State<HostState>) -> Result<Html<String>, AppError> {
    let html = host.views.render(
        "host.html",
        context! {
            title => "Host",
            console_href => host.console_href,
            current_user => host.signed_in.as_deref(),
        },
    )?;
    Ok(Html(html))
}
