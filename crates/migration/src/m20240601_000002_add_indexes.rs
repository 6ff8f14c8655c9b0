use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_plan::Plan;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Plan: lookups by owner
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_plan_user_id")
                    .table(Plan::Table)
                    .col(Plan::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_plan_user_id").table(Plan::Table).to_owned())
            .await
    }
}
