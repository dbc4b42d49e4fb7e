use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;
use crate::telemetry::PoolStats;

/// Opens the sqlx-backed pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .sqlx_logging(false);

    Database::connect(opt).await
}

/// Current pool occupancy, or `None` for connections not backed by a
/// Postgres pool.
pub fn pool_stats(db: &DatabaseConnection) -> Option<PoolStats> {
    match db {
        DatabaseConnection::SqlxPostgresPoolConnection(_) => {
            let pool = db.get_postgres_connection_pool();
            Some(PoolStats {
                open: pool.size(),
                idle: u32::try_from(pool.num_idle()).unwrap_or(u32::MAX),
                max: pool.options().get_max_connections(),
            })
        }
        _ => None,
    }
}

/// Closes the pool once every server has stopped using it.
pub async fn close(db: &DatabaseConnection) {
    if let DatabaseConnection::SqlxPostgresPoolConnection(_) = db {
        db.get_postgres_connection_pool().close().await;
    }
}
