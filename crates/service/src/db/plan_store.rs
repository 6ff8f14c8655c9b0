use sea_orm::DatabaseConnection;
use models::document::{Plan, PlanInput};
use models::plan;
use crate::errors::ServiceError;

/// Insert a plan; the id and timestamps come from the store.
pub async fn create_plan(db: &DatabaseConnection, input: &PlanInput) -> Result<Plan, ServiceError> {
    let created = plan::create(db, input).await?;
    Ok(created.to_plan()?)
}

/// Get a plan by id.
pub async fn get_plan(db: &DatabaseConnection, id: i32) -> Result<Option<Plan>, ServiceError> {
    let found = plan::find_by_id(db, id).await?;
    Ok(found.map(|m| m.to_plan()).transpose()?)
}

/// All plans owned by `user_id`, oldest first.
pub async fn get_plans_by_user(db: &DatabaseConnection, user_id: &str) -> Result<Vec<Plan>, ServiceError> {
    let rows = plan::find_by_user(db, user_id).await?;
    let plans = rows.iter().map(plan::Model::to_plan).collect::<Result<Vec<_>, _>>()?;
    Ok(plans)
}

/// Get a plan by its unique name.
pub async fn get_plan_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Plan>, ServiceError> {
    let found = plan::find_by_name(db, name).await?;
    Ok(found.map(|m| m.to_plan()).transpose()?)
}

/// Names of every stored plan, oldest first.
pub async fn list_plan_names(db: &DatabaseConnection) -> Result<Vec<String>, ServiceError> {
    Ok(plan::list_names(db).await?)
}

/// Replace a plan's content; `None` if `id` does not exist.
pub async fn update_plan(db: &DatabaseConnection, id: i32, input: &PlanInput) -> Result<Option<Plan>, ServiceError> {
    let updated = plan::replace(db, id, input).await?;
    Ok(updated.map(|m| m.to_plan()).transpose()?)
}

/// Delete a plan; returns true if deleted.
pub async fn delete_plan(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    Ok(plan::hard_delete(db, id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use serde_json::json;

    fn input(name: &str, user: Option<&str>) -> PlanInput {
        serde_json::from_value(json!({
            "name": name,
            "userId": user,
            "preferences": {"hobbies": ["hiking"], "tripDuration": 2},
            "days": [{"day": 1, "items": [
                {"id": "x", "type": "activity", "item": {"name": "Fuji"}, "timeSlot": "09:00", "position": {"row": 0, "col": 0}}
            ]}]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn plan_crud_store() -> Result<(), anyhow::Error> {
        let db = get_db().await?;

        let a = create_plan(&db, &input("Hakone", Some("u1"))).await?;
        let found = get_plan(&db, a.id).await?.unwrap();
        assert_eq!(found, a);
        assert_eq!(found.days[0].items[0].item, json!({"name": "Fuji"}));

        let mut next = input("Hakone", Some("u1"));
        next.preferences.hobbies = Some(vec!["onsen".into()]);
        let updated = update_plan(&db, a.id, &next).await?.unwrap();
        assert_eq!(updated.preferences.hobbies, Some(vec!["onsen".to_string()]));
        assert_eq!(updated.preferences.trip_duration, Some(2));

        assert_eq!(get_plans_by_user(&db, "u1").await?.len(), 1);
        assert!(get_plans_by_user(&db, "u2").await?.is_empty());
        assert_eq!(get_plan_by_name(&db, "Hakone").await?.map(|p| p.id), Some(a.id));
        assert_eq!(list_plan_names(&db).await?, vec!["Hakone"]);

        assert!(update_plan(&db, a.id + 100, &next).await?.is_none());

        assert!(delete_plan(&db, a.id).await?);
        assert!(get_plan(&db, a.id).await?.is_none());
        assert!(!delete_plan(&db, a.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_name_is_db_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_plan(&db, &input("Kyoto", None)).await?;
        let err = create_plan(&db, &input("Kyoto", Some("u9"))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)), "{err}");
        Ok(())
    }
}
