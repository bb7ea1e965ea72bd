use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Open a pooled connection from configuration.
///
/// In-memory databases keep their single connection alive for the life of
/// the pool; dropping it would drop the schema.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    common::env::ensure_sqlite_dir(&cfg.url).await?;

    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if cfg.is_in_memory() {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.idle_timeout(Duration::from_secs(600));
    }

    let db = Database::connect(opt).await?;
    info!(url = %cfg.url, max_connections = cfg.max_connections, "database connected");
    Ok(db)
}
