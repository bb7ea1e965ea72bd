//! Migrators for the two services.
//! Each service owns a separate database file, so each gets its own migrator
//! with only the tables it needs.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_animals;
mod m20240101_000002_create_cars;

pub struct AnimalsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for AnimalsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_animals::Migration)]
    }
}

pub struct CarsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for CarsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000002_create_cars::Migration)]
    }
}
