#![cfg(test)]
use configs::DatabaseConfig;
use migration::{AnimalsMigrator, CarsMigrator, MigratorTrait};
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory database holding the `animals` table.
pub async fn animals_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    AnimalsMigrator::up(&db, None).await?;
    Ok(db)
}

/// Fresh, migrated in-memory database holding the `cars` table.
pub async fn cars_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    CarsMigrator::up(&db, None).await?;
    Ok(db)
}
