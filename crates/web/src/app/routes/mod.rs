use axum::Router;

pub mod create;
pub mod detail;
pub mod list;
pub mod roles;
pub mod system;

/// Router for the console pages, at logical paths.
pub fn router() -> Router {
    Router::new()
        .merge(list::router())
        .merge(detail::router())
        .merge(create::router())
        .merge(roles::router())
}
