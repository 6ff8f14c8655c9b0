//! Create `plan` table.
//!
//! `preferences` and `days` hold JSON documents as TEXT; the store never
//! queries into them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plan::Table)
                    .if_not_exists()
                    .col(pk_auto(Plan::Id))
                    .col(string_len(Plan::Name, 255).unique_key().not_null())
                    .col(ColumnDef::new(Plan::UserId).string().null())
                    .col(text(Plan::Preferences).not_null())
                    .col(text(Plan::Days).not_null())
                    .col(timestamp_with_time_zone(Plan::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Plan::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Plan::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Plan {
    Table,
    Id,
    Name,
    UserId,
    Preferences,
    Days,
    CreatedAt,
    UpdatedAt,
}
