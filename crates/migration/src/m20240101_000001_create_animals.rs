//! Create `animals` table.
//!
//! `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Animals::Table)
                    .if_not_exists()
                    .col(pk_auto(Animals::Id))
                    .col(string_len(Animals::Name, 50).not_null())
                    .col(string_len(Animals::Species, 50).not_null())
                    .col(big_integer(Animals::Age).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Animals::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Animals { Table, Id, Name, Species, Age }
