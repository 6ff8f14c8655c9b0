//! Migrator creating the `plan` table.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_plan;
mod m20240601_000002_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_plan::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000002_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::Database;

    #[tokio::test]
    async fn up_is_idempotent_and_down_reverts() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await?;
        // already applied: second run is a no-op
        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        assert!(manager.has_table("plan").await?);
        assert!(manager.has_index("plan", "idx_plan_user_id").await?);

        Migrator::down(&db, None).await?;
        assert!(!manager.has_table("plan").await?);
        Ok(())
    }
}
