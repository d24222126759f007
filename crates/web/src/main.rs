use std::sync::Arc;

use anyhow::Context;
use useradmin_infra::{InMemoryRepository, UserRepository};
use useradmin_web::config::WebConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    useradmin_observability::init();

    let config = WebConfig::from_env().context("invalid configuration")?;

    let repository: Arc<dyn UserRepository> = match &config.seed_file {
        Some(path) => Arc::new(InMemoryRepository::from_json_file(path)?),
        None => Arc::new(InMemoryRepository::seeded()),
    };

    let app = useradmin_web::app::build_app(&config, repository)?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        mode = %config.mode,
        base_path = config.effective_base_path(),
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
