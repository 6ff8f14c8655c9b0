use async_trait::async_trait;
use models::document::{Plan, PlanInput};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Persistence operations for plans. `update` and `get*` report absence as `None`.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    async fn create(&self, input: &PlanInput) -> Result<Plan, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<Plan>, ServiceError>;
    async fn get_by_user(&self, user_id: &str) -> Result<Vec<Plan>, ServiceError>;
    async fn get_by_name(&self, name: &str) -> Result<Option<Plan>, ServiceError>;
    async fn list_names(&self) -> Result<Vec<String>, ServiceError>;
    async fn update(&self, id: i32, input: &PlanInput) -> Result<Option<Plan>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmPlanRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl PlanRepository for SeaOrmPlanRepository {
    async fn create(&self, input: &PlanInput) -> Result<Plan, ServiceError> {
        crate::db::plan_store::create_plan(&self.db, input).await
    }

    async fn get(&self, id: i32) -> Result<Option<Plan>, ServiceError> {
        crate::db::plan_store::get_plan(&self.db, id).await
    }

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<Plan>, ServiceError> {
        crate::db::plan_store::get_plans_by_user(&self.db, user_id).await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Plan>, ServiceError> {
        crate::db::plan_store::get_plan_by_name(&self.db, name).await
    }

    async fn list_names(&self) -> Result<Vec<String>, ServiceError> {
        crate::db::plan_store::list_plan_names(&self.db).await
    }

    async fn update(&self, id: i32, input: &PlanInput) -> Result<Option<Plan>, ServiceError> {
        crate::db::plan_store::update_plan(&self.db, id, input).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::plan_store::delete_plan(&self.db, id).await
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;

    use models::document::DateTimeWithTimeZone;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Rows {
        next_id: i32,
        plans: BTreeMap<i32, Plan>, // key: plan id
    }

    /// Mirrors the SQLite store, including the unique name constraint.
    #[derive(Default)]
    pub struct MockPlanRepository {
        rows: Mutex<Rows>,
    }

    fn now() -> DateTimeWithTimeZone {
        chrono::Utc::now().into()
    }

    fn name_taken(rows: &Rows, name: &str, except: Option<i32>) -> bool {
        rows.plans.values().any(|p| p.name == name && Some(p.id) != except)
    }

    fn unique_violation() -> ServiceError {
        ServiceError::Db("UNIQUE constraint failed: plan.name".into())
    }

    #[async_trait]
    impl PlanRepository for MockPlanRepository {
        async fn create(&self, input: &PlanInput) -> Result<Plan, ServiceError> {
            let mut rows = self.rows.lock().await;
            if name_taken(&rows, &input.name, None) {
                return Err(unique_violation());
            }
            rows.next_id += 1;
            let ts = now();
            let plan = Plan {
                id: rows.next_id,
                name: input.name.clone(),
                user_id: input.user_id.clone(),
                preferences: input.preferences.clone(),
                days: input.days.clone(),
                created_at: ts,
                updated_at: ts,
            };
            rows.plans.insert(plan.id, plan.clone());
            Ok(plan)
        }

        async fn get(&self, id: i32) -> Result<Option<Plan>, ServiceError> {
            Ok(self.rows.lock().await.plans.get(&id).cloned())
        }

        async fn get_by_user(&self, user_id: &str) -> Result<Vec<Plan>, ServiceError> {
            let rows = self.rows.lock().await;
            Ok(rows.plans.values().filter(|p| p.user_id.as_deref() == Some(user_id)).cloned().collect())
        }

        async fn get_by_name(&self, name: &str) -> Result<Option<Plan>, ServiceError> {
            let rows = self.rows.lock().await;
            Ok(rows.plans.values().find(|p| p.name == name).cloned())
        }

        async fn list_names(&self) -> Result<Vec<String>, ServiceError> {
            Ok(self.rows.lock().await.plans.values().map(|p| p.name.clone()).collect())
        }

        async fn update(&self, id: i32, input: &PlanInput) -> Result<Option<Plan>, ServiceError> {
            let mut rows = self.rows.lock().await;
            if !rows.plans.contains_key(&id) {
                return Ok(None);
            }
            if name_taken(&rows, &input.name, Some(id)) {
                return Err(unique_violation());
            }
            let Some(plan) = rows.plans.get_mut(&id) else { return Ok(None) };
            plan.name = input.name.clone();
            plan.user_id = input.user_id.clone();
            plan.preferences = input.preferences.clone();
            plan.days = input.days.clone();
            plan.updated_at = now();
            Ok(Some(plan.clone()))
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.rows.lock().await.plans.remove(&id).is_some())
        }
    }
}
