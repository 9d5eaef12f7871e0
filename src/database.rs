use std::time::Duration;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use migration::{Migrator, MigratorTrait};
use crate::config::Config;

/// Opens the pool and brings the schema up to date.
pub async fn connect(cfg: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(cfg.database_url.clone());
    opts.max_connections(cfg.database_max_connections)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    migrate(&db).await?;

    Ok(db)
}

pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}

pub async fn close(db: DatabaseConnection) {
    if let Err(e) = db.close().await {
        tracing::error!("failed to close database connection: {}", e);
    }
}
