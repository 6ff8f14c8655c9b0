use std::{net::SocketAddr, sync::Arc};

use axum::{
    http::{header, Method},
    Router,
};
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, DatabaseConfig};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use service::plan::repository::SeaOrmPlanRepository;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_from_env();
}

/// Any origin may call the API; browsers get the methods and headers the UI uses.
pub fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}

/// Open the store, run pending migrations and wrap it as handler state.
pub async fn build_state(db_cfg: &DatabaseConfig) -> Result<ServerState, StartupError> {
    common::env::ensure_env(&db_cfg.url).await?;

    let db = models::db::connect_with_config(db_cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    info!(event = "migrations_applied", "database schema up to date");

    Ok(ServerState::new(Arc::new(SeaOrmPlanRepository { db })))
}

/// Router with the production CORS policy applied.
pub fn app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let state = build_state(&cfg.database).await?;

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, event = "listening", "plan server listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
