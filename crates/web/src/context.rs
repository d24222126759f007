use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Html;
use minijinja::Value;
use useradmin_console::context::require;
use useradmin_console::{Mount, Shell};

use crate::app::errors::AppError;
use crate::app::views::{LayoutView, Views};

/// Console context for a request: the mounted instance plus its templates.
///
/// Inserted by [`crate::middleware::console_context`]. A handler that runs
/// without it is wired wrong, so extraction fails with
/// [`useradmin_core::ConsoleError::ContextUnavailable`] (HTTP 500) instead of defaulting.
#[derive(Clone)]
pub struct ConsoleContext {
    mount: Arc<Mount>,
    views: Arc<Views>,
}

impl ConsoleContext {
    pub fn new(mount: Arc<Mount>, views: Arc<Views>) -> Self {
        Self { mount, views }
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    pub fn shell(&self) -> &Shell {
        self.mount.shell()
    }

    /// Render `template` inside the console layout.
    pub fn render(
        &self,
        template: &str,
        current_path: &str,
        title: &str,
        page: Value,
    ) -> Result<Html<String>, AppError> {
        let layout = LayoutView::new(&self.mount, current_path, title);
        let html = self.views.render_page(template, &layout, page)?;
        Ok(Html(html))
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for ConsoleContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        require(parts.extensions.get::<ConsoleContext>().cloned()).map_err(|err| {
            tracing::error!(path = %parts.uri.path(), "console handler reached without a mount");
            AppError::Console(err)
        })
    }
}
