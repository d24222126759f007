//! HTTP application wiring (Axum router + mount wiring).
//!
//! - `routes/`: one file per console page, plus `system.rs` for redirects
//! - `views.rs`: templates and the view models handed to them
//! - `host.rs`: the demo host page used when running embedded
//! - `errors.rs`: error to response mapping

use std::sync::Arc;

use axum::{routing::get, Router};
use useradmin_console::{HostProps, Mount, MountMode};
use useradmin_infra::UserRepository;

use crate::config::WebConfig;
use crate::context::ConsoleContext;
use crate::middleware;

use self::errors::AppError;
use self::views::Views;

pub mod errors;
pub mod host;
pub mod routes;
pub mod views;

/// The console's routed subtree, with logical paths at its root.
///
/// Unmatched paths fall back to the shell, which redirects them to the list.
pub fn router(mount: Arc<Mount>) -> Router {
    with_console(
        routes::router()
            .route("/", get(routes::system::navigate))
            .fallback(routes::system::navigate),
        mount,
    )
}

/// Page routes only: no `/` and no fallback, for sharing the host's root.
fn page_router(mount: Arc<Mount>) -> Router {
    with_console(routes::router(), mount)
}

fn with_console(router: Router, mount: Arc<Mount>) -> Router {
    let console = ConsoleContext::new(mount, Arc::new(Views::new()));
    router.layer(axum::middleware::from_fn_with_state(
        console,
        middleware::console_context,
    ))
}

/// Mount the console into a host router under the mount's base path.
///
/// With an empty base path the page routes are merged at the host's root and
/// the host keeps `/` and its own fallback.
pub fn attach(host: Router, mount: Arc<Mount>) -> Result<Router, AppError> {
    let base_path = mount.context().base_path().to_string();
    if base_path.is_empty() {
        tracing::debug!("merging console page routes into host root");
        return Ok(host.merge(page_router(mount)));
    }
    if !base_path.starts_with('/') || base_path.ends_with('/') {
        return Err(AppError::InvalidBasePath(base_path));
    }

    tracing::debug!(base_path = %base_path, "nesting console under host");
    Ok(host.nest(&base_path, router(mount)))
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(
    config: &WebConfig,
    repository: Arc<dyn UserRepository>,
) -> Result<Router, AppError> {
    if config.mode.owns_navigation() {
        let mount = Arc::new(Mount::standalone(repository));
        return Ok(Router::new()
            .route("/health", get(routes::system::health))
            .merge(router(mount)));
    }

    let props = HostProps {
        base_path: Some(config.base_path.clone()),
        current_user: config.host_user.clone(),
    };
    let mount = Arc::new(Mount::new(MountMode::HostEmbedded, Some(props), repository)?);

    let host = Router::new()
        .route("/health", get(routes::system::health))
        .merge(host::router(&mount));
    attach(host, mount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use useradmin_infra::InMemoryRepository;

    fn repository() -> Arc<dyn UserRepository> {
        Arc::new(InMemoryRepository::seeded())
    }

    fn embedded(base: &str) -> Arc<Mount> {
        Arc::new(
            Mount::new(MountMode::HostEmbedded, Some(HostProps::new(base)), repository())
                .unwrap(),
        )
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    fn location(res: &axum::response::Response) -> &str {
        res.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn standalone_root_redirects_to_list() {
        let app = router(Arc::new(Mount::standalone(repository())));
        let res = get(app, "/").await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/list");
    }

    #[tokio::test]
    async fn attached_console_redirects_inside_the_base_path() {
        let app = attach(Router::new(), embedded("/users")).unwrap();

        let res = get(app.clone(), "/users/nowhere").await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/users/list");

        let res = get(app, "/users/list").await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn host_routes_outside_the_base_path_stay_with_the_host() {
        let host = Router::new().route("/billing", axum::routing::get(|| async { "billing" }));
        let app = attach(host, embedded("/users")).unwrap();

        let res = get(app.clone(), "/billing").await;
        assert_eq!(res.status(), StatusCode::OK);

        let res = get(app, "/elsewhere").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn trailing_slash_redirects_to_canonical_path() {
        let app = attach(Router::new(), embedded("/admin")).unwrap();
        let res = get(app, "/admin/roles/").await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/admin/roles");
    }

    #[tokio::test]
    async fn empty_base_path_leaves_root_and_fallback_to_the_host() {
        let host = Router::new()
            .route("/", axum::routing::get(|| async { "host home" }))
            .fallback(|| async { (StatusCode::NOT_FOUND, "host 404") });
        let app = attach(host, embedded("")).unwrap();

        let res = get(app.clone(), "/").await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"host home");

        assert_eq!(get(app.clone(), "/list").await.status(), StatusCode::OK);
        assert_eq!(get(app.clone(), "/roles").await.status(), StatusCode::OK);
        assert_eq!(get(app, "/nowhere").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn embedded_build_with_empty_base_path_serves_host_home() {
        let config = WebConfig::from_lookup(|key| match key {
            "STANDALONE" => Some("false".to_string()),
            "USERADMIN_BASE_PATH" => Some(String::new()),
            _ => None,
        })
        .unwrap();
        let app = build_app(&config, repository()).unwrap();

        assert_eq!(get(app.clone(), "/").await.status(), StatusCode::OK);
        assert_eq!(get(app, "/create").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn handler_outside_a_mount_fails_loudly() {
        let app = Router::new().route("/roles", axum::routing::get(routes::roles::show_roles));
        let res = get(app, "/roles").await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn attach_rejects_malformed_base_paths() {
        for base in ["users", "/users/"] {
            let err = attach(Router::new(), embedded(base)).unwrap_err();
            assert!(matches!(err, AppError::InvalidBasePath(ref b) if b == base));
        }
    }

    #[tokio::test]
    async fn embedded_build_has_host_home_and_health() {
        let config = WebConfig::from_lookup(|key| match key {
            "STANDALONE" => Some("false".to_string()),
            _ => None,
        })
        .unwrap();
        let app = build_app(&config, repository()).unwrap();

        assert_eq!(get(app.clone(), "/health").await.status(), StatusCode::OK);
        assert_eq!(get(app.clone(), "/").await.status(), StatusCode::OK);
        let res = get(app, "/users").await;
        assert_eq!(location(&res), "/users/list");
    }
}
