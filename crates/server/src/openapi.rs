use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

/// Request body for create and update. `preferences` and `days` are stored verbatim.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PlanInputDoc {
    pub name: String,
    pub user_id: Option<String>,
    #[schema(value_type = Object)]
    pub preferences: serde_json::Value,
    #[schema(value_type = Vec<Object>)]
    pub days: Vec<serde_json::Value>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PlanDoc {
    pub id: i32,
    pub name: String,
    pub user_id: Option<String>,
    #[schema(value_type = Object)]
    pub preferences: serde_json::Value,
    #[schema(value_type = Vec<Object>)]
    pub days: Vec<serde_json::Value>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::plans::list_names,
        crate::routes::plans::create,
        crate::routes::plans::get,
        crate::routes::plans::update,
        crate::routes::plans::delete,
        crate::routes::plans::list_by_user,
        crate::routes::plans::get_by_name,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            PlanInputDoc,
            PlanDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "plans")
    )
)]
pub struct ApiDoc;
