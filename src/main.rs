//! Mini ERP - back-office HTTP service

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_erp::api::{self, AppState};
use mini_erp::config::Config;
use mini_erp::db;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let db = db::create_pool(&config).await?;
    db::migrate(&db).await?;

    let app = api::router(AppState { db });
    let addr = config.socket_addr();
    tracing::info!("Mini ERP listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
