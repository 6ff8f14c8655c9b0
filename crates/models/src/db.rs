use std::{env, time::Duration};

use configs::{DatabaseConfig, DEFAULT_DATABASE_URL};
use once_cell::sync::Lazy;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::sqlx::ConnectOptions as _;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use tracing::info;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
});

/// Connect using `DATABASE_URL` and the default single-writer pool.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: DATABASE_URL.clone(), ..DatabaseConfig::default() };
    connect_with_config(&cfg).await
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    if is_in_memory(&cfg.url) {
        return connect_in_memory(cfg).await;
    }
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

/// An in-memory database lives exactly as long as its connection.
pub fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

// 内存库的连接一旦被回收，数据随之消失：不设 idle/lifetime 上限
pub(crate) fn in_memory_pool_options(cfg: &DatabaseConfig) -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(None)
        .max_lifetime(None)
}

async fn connect_in_memory(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts: SqliteConnectOptions = cfg.url.parse()?;
    if !cfg.sqlx_logging {
        opts = opts.disable_statement_logging();
    }
    let pool = in_memory_pool_options(cfg).connect_with(opts).await?;
    info!(max_connections = cfg.max_connections, "in-memory database connected");
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}
