//! Create `cars` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(pk_auto(Cars::Id))
                    .col(string_len(Cars::Make, 50).not_null())
                    .col(string_len(Cars::Model, 50).not_null())
                    .col(integer(Cars::Year).not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_cars_make")
                    .table(Cars::Table)
                    .col(Cars::Make)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cars::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cars { Table, Id, Make, Model, Year }
