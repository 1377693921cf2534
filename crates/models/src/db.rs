use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

pub use configs::DatabaseConfig;

/// Connect using pool settings from configuration.
///
/// An in-memory SQLite database lives inside a single connection, so the pool
/// is pinned to one connection for `:memory:` URLs.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    let in_memory = cfg.url.contains(":memory:");
    let (max, min) = if in_memory { (1, 1) } else { (cfg.max_connections, cfg.min_connections) };
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if !in_memory {
        opts.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs));
    }
    let db = Database::connect(opts).await?;
    info!(in_memory, max_connections = max, "database connected");
    Ok(db)
}
