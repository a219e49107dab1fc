use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillmatch::config::Config;
use skillmatch::db::{create_pool, run_migrations};
use skillmatch::matching::scorer::WeightedSkillScorer;
use skillmatch::routes::build_router;
use skillmatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    if config.run_migrations {
        run_migrations(&db).await?;
    } else {
        info!("RUN_MIGRATIONS=false, skipping schema migrations");
    }

    let scorer = Arc::new(WeightedSkillScorer);
    info!("Match scorer initialized (backend: {})", WeightedSkillScorer::BACKEND);

    let state = AppState { db, scorer };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
