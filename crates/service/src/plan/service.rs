use std::sync::Arc;

use models::document::{Plan, PlanInput};
use models::plan::{validate_name, validate_user_id};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::plan::repository::PlanRepository;

/// Application service for trip plans, independent of the web framework.
///
/// Refuses blank names, turns absent rows into `ServiceError::NotFound`, and
/// leaves concurrency to the store: last writer wins.
pub struct PlanService<R: PlanRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PlanRepository + ?Sized> Clone for PlanService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: PlanRepository + ?Sized> PlanService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store a new plan and return it with its assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::plan::{PlanService, repository::mock::MockPlanRepository};
    /// use models::document::PlanInput;
    /// use std::sync::Arc;
    /// let svc = PlanService::new(Arc::new(MockPlanRepository::default()));
    /// let input: PlanInput = serde_json::from_str(r#"{"name": " Tokyo Trip "}"#).unwrap();
    /// let plan = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(plan.id, 1);
    /// assert_eq!(plan.name, " Tokyo Trip ");
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: PlanInput) -> Result<Plan, ServiceError> {
        validate_name(&input.name)?;
        let plan = self.repo.create(&input).await?;
        info!(plan_id = plan.id, days = plan.days.len(), "plan_created");
        Ok(plan)
    }

    pub async fn get(&self, id: i32) -> Result<Plan, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(&format!("plan {id}")))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Plan, ServiceError> {
        self.repo
            .get_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::not_found(&format!("plan '{name}'")))
    }

    /// Plans owned by `user_id`; an unknown user yields an empty list.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Plan>, ServiceError> {
        validate_user_id(user_id)?;
        self.repo.get_by_user(user_id).await
    }

    pub async fn list_names(&self) -> Result<Vec<String>, ServiceError> {
        self.repo.list_names().await
    }

    /// Replace the whole document stored under `id`. Strict: a missing id is
    /// `NotFound`, never an insert.
    #[instrument(skip(self, input), fields(plan_id = id))]
    pub async fn update(&self, id: i32, input: PlanInput) -> Result<Plan, ServiceError> {
        validate_name(&input.name)?;
        let plan = self
            .repo
            .update(id, &input)
            .await?
            .ok_or_else(|| ServiceError::not_found(&format!("plan {id}")))?;
        info!(plan_id = plan.id, "plan_updated");
        Ok(plan)
    }

    #[instrument(skip(self), fields(plan_id = id))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(&format!("plan {id}")));
        }
        info!(plan_id = id, "plan_deleted");
        Ok(())
    }
}
