mod config;

use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use scribe_api::views::Views;
use scribe_api::{AppState, AppStateInner};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scribe=debug,scribe_api=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    if config.using_dev_secret {
        warn!("SCRIBE_JWT_SECRET is not set; using the development secret");
    }

    // Init database
    let db = scribe_db::Database::open(&config.db_path)?;

    let state: AppState = Arc::new(AppStateInner {
        db,
        jwt_secret: config.jwt_secret.clone(),
        views: Views::new()?,
    });

    let app = scribe_api::router(state)
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http());

    let addr = config.addr()?;
    info!("Scribe listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
