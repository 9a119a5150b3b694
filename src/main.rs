use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use school_activities::{build_router, ActivityRegistry, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    // Seeded once; every restart starts from the empty catalog again.
    let registry = ActivityRegistry::seeded();
    info!(activities = registry.activity_count(), "activity registry seeded");

    let app = build_router(registry, &config.static_dir);

    let addr = config.socket_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Serving activities on http://{}", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
