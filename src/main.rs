use std::sync::Arc;

use anyhow::{Context, Result};
use build_catalog::config::AppConfig;
use build_catalog::route::create_router;
use build_catalog::store::{BuildStore, MemoryBuildStore, PgBuildStore};
use build_catalog::AppState;
use sqlx::postgres;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let default_filter = format!("{}=debug,tower_http=info", env!("CARGO_CRATE_NAME"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn BuildStore> = match &config.database_url {
        Some(url) => {
            // set up connection pool
            let pool = postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(config.acquire_timeout)
                .connect(url)
                .await
                .context("can't connect to database")?;

            let store = PgBuildStore::new(pool);
            store.migrate().await.context("running migrations")?;
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, builds are kept in memory");
            Arc::new(MemoryBuildStore::new())
        }
    };

    let app = create_router(Arc::new(AppState::new(store)));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::debug!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
