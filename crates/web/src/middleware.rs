use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use crate::context::ConsoleContext;

/// Attach the console context to every request routed into the console.
pub async fn console_context(
    State(console): State<ConsoleContext>,
    mut req: Request,
    next: Next,
) -> Response {
    let span = tracing::debug_span!(
        "console",
        mode = %console.mount().mode(),
        base_path = console.mount().context().base_path(),
    );
    req.extensions_mut().insert(console);

    next.run(req).instrument(span).await
}
