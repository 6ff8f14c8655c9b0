

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::db::connect_with_config;
use crate::document::PlanInput;

/// Fresh in-memory database with the schema applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub(crate) fn tokyo_trip() -> PlanInput {
    serde_json::from_value(json!({
        "name": "Tokyo Trip",
        "preferences": {
            "hobbies": ["hiking"],
            "budgetRange": {"min": 100, "max": 500},
            "tripDuration": 5,
            "travelStyle": "relaxed"
        },
        "days": [{"day": 1, "items": []}]
    }))
    .expect("tokyo trip fixture")
}
