use axum::{
    extract::{Form, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use minijinja::context;
use serde::Deserialize;
use useradmin_console::pages::create::MISSING_FIELDS_ALERT;
use useradmin_console::pages::CreateForm;
use useradmin_console::route::CREATE_PATH;
use useradmin_console::Route;
use useradmin_core::{ConsoleError, UserRole, UserStatus};

use crate::app::errors::AppError;
use crate::context::ConsoleContext;

pub fn router() -> Router {
    Router::new().route(CREATE_PATH, get(new_user).post(create_user))
}

/// `?role=` preselects a role, which also switches the permission preview.
#[derive(Debug, Default, Deserialize)]
pub struct NewUserQuery {
    pub role: Option<UserRole>,
}

pub async fn new_user(
    console: ConsoleContext,
    Query(query): Query<NewUserQuery>,
) -> Result<Html<String>, AppError> {
    let form = CreateForm {
        role: query.role.unwrap_or_default(),
        ..CreateForm::default()
    };
    render_form(&console, &form, None)
}

/// Validate and build the user; nothing is persisted.
pub async fn create_user(
    console: ConsoleContext,
    Form(form): Form<CreateForm>,
) -> Result<Response, AppError> {
    match form.submit(console.mount().context(), Utc::now()) {
        Ok(submission) => {
            let to = format!("{}?notice=created", submission.redirect_to);
            Ok(Redirect::to(&to).into_response())
        }
        Err(ConsoleError::MissingRequiredField(field)) => {
            tracing::debug!(field, "create form rejected");
            let html = render_form(&console, &form, Some(MISSING_FIELDS_ALERT))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, html).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

fn render_form(
    console: &ConsoleContext,
    form: &CreateForm,
    alert: Option<&str>,
) -> Result<Html<String>, AppError> {
    let shell = console.shell();
    let action = shell.href(&Route::Create);

    let roles: Vec<_> = UserRole::ALL
        .iter()
        .map(|role| context! { value => role.as_str(), label => role.label(), selected => *role == form.role })
        .collect();
    let preview_links: Vec<_> = UserRole::ALL
        .iter()
        .map(|role| context! {
            label => role.label(),
            href => format!("{action}?role={}", role.as_str()),
            selected => *role == form.role,
        })
        .collect();
    let statuses: Vec<_> = UserStatus::ALL
        .iter()
        .map(|status| context! { value => status.as_str(), label => status.label(), selected => *status == form.status })
        .collect();

    console.render(
        "create.html",
        &action,
        "Add User",
        context! {
            form => form,
            alert => alert,
            action => action,
            roles => roles,
            statuses => statuses,
            preview => form.preview(),
            preview_links => preview_links,
            cancel_href => shell.list_href(),
        },
    )
}
