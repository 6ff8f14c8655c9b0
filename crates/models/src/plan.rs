use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set, DatabaseConnection, QueryOrder, QuerySelect};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::document::{CalendarDay, Plan, PlanInput, UserPreferences};
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub user_id: Option<String>,
    /// JSON-encoded `UserPreferences`.
    #[sea_orm(column_type = "Text")]
    pub preferences: String,
    /// JSON-encoded `Vec<CalendarDay>`.
    #[sea_orm(column_type = "Text")]
    pub days: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Decode the stored row into its document form.
    pub fn to_plan(&self) -> Result<Plan, errors::ModelError> {
        let preferences: UserPreferences = serde_json::from_str(&self.preferences)
            .map_err(|e| errors::ModelError::Codec(format!("plan {} preferences: {e}", self.id)))?;
        let days: Vec<CalendarDay> = serde_json::from_str(&self.days)
            .map_err(|e| errors::ModelError::Codec(format!("plan {} days: {e}", self.id)))?;
        Ok(Plan {
            id: self.id,
            name: self.name.clone(),
            user_id: self.user_id.clone(),
            preferences,
            days,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// JSON text columns for a plan body.
#[derive(Debug)]
pub struct EncodedDocument {
    pub preferences: String,
    pub days: String,
}

pub fn encode(input: &PlanInput) -> Result<EncodedDocument, errors::ModelError> {
    let preferences = serde_json::to_string(&input.preferences)
        .map_err(|e| errors::ModelError::Codec(format!("preferences: {e}")))?;
    let days = serde_json::to_string(&input.days)
        .map_err(|e| errors::ModelError::Codec(format!("days: {e}")))?;
    Ok(EncodedDocument { preferences, days })
}

/// Names are stored exactly as sent; only a blank name is refused.
pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub fn validate_user_id(user_id: &str) -> Result<(), errors::ModelError> {
    if user_id.trim().is_empty() {
        return Err(errors::ModelError::Validation("user id required".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: &PlanInput) -> Result<Model, errors::ModelError> {
    validate_name(&input.name)?;
    let doc = encode(input)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        name: Set(input.name.clone()),
        user_id: Set(input.user_id.clone()),
        preferences: Set(doc.preferences),
        days: Set(doc.days),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite every client-owned column of an existing row.
/// Returns `None` when no row has `id`; `created_at` is kept.
pub async fn replace(db: &DatabaseConnection, id: i32, input: &PlanInput) -> Result<Option<Model>, errors::ModelError> {
    validate_name(&input.name)?;
    let doc = encode(input)?;
    let Some(existing) = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
    else {
        return Ok(None);
    };
    let mut am: ActiveModel = existing.into();
    am.name = Set(input.name.clone());
    am.user_id = Set(input.user_id.clone());
    am.preferences = Set(doc.preferences);
    am.days = Set(doc.days);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_user(db: &DatabaseConnection, user_id: &str) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn list_names(db: &DatabaseConnection) -> Result<Vec<String>, errors::ModelError> {
    Entity::find()
        .select_only()
        .column(Column::Name)
        .order_by_asc(Column::Id)
        .into_tuple::<String>()
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Hard delete; returns true if a row was removed.
pub async fn hard_delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
