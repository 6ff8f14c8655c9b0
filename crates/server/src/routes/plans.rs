use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::document::{Plan, PlanInput};
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

/// Path ids are unsigned 32-bit integers. Ids above the key column's range
/// cannot exist, so they are reported as not found.
fn parse_plan_id(raw: &str) -> Result<i32, JsonApiError> {
    let id = raw
        .parse::<u32>()
        .map_err(|_| JsonApiError::bad_request("Invalid plan ID"))?;
    i32::try_from(id).map_err(|_| JsonApiError::new(StatusCode::NOT_FOUND, "Plan not found"))
}

#[utoipa::path(
    post, path = "/api/plans", tag = "plans",
    request_body = crate::openapi::PlanInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PlanDoc),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Store error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<PlanInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Plan>), JsonApiError> {
    let Json(input) = body?;
    let plan = state.plans.create(input).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

#[utoipa::path(
    get, path = "/api/plans/{id}", tag = "plans",
    params(("id" = u32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PlanDoc),
        (status = 400, description = "Invalid plan ID"),
        (status = 404, description = "Plan not found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Plan>, JsonApiError> {
    let id = parse_plan_id(&id)?;
    Ok(Json(state.plans.get(id).await?))
}

#[utoipa::path(
    put, path = "/api/plans/{id}", tag = "plans",
    params(("id" = u32, Path, description = "Plan ID")),
    request_body = crate::openapi::PlanInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PlanDoc),
        (status = 400, description = "Invalid plan ID or malformed body"),
        (status = 404, description = "Plan not found"),
        (status = 500, description = "Store error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Result<Json<PlanInput>, JsonRejection>,
) -> Result<Json<Plan>, JsonApiError> {
    let id = parse_plan_id(&id)?;
    // any id in the body is ignored; the path decides which plan is replaced
    let Json(input) = body?;
    Ok(Json(state.plans.update(id, input).await?))
}

#[utoipa::path(
    delete, path = "/api/plans/{id}", tag = "plans",
    params(("id" = u32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponse),
        (status = 400, description = "Invalid plan ID"),
        (status = 404, description = "Plan not found"),
        (status = 500, description = "Store error")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Message>, JsonApiError> {
    let id = parse_plan_id(&id)?;
    state.plans.delete(id).await?;
    Ok(Json(Message::new("Plan deleted successfully")))
}

#[utoipa::path(
    get, path = "/api/plans/user/{user_id}", tag = "plans",
    params(("user_id" = String, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Plans owned by the user, possibly empty", body = [crate::openapi::PlanDoc]),
        (status = 400, description = "User ID required"),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_by_user(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Plan>>, JsonApiError> {
    if user_id.trim().is_empty() {
        return Err(missing_user_id());
    }
    let plans = state.plans.list_by_user(&user_id).await?;
    info!(count = plans.len(), "list plans by user");
    Ok(Json(plans))
}

/// `GET /api/plans/user/` with the user segment left empty.
pub async fn list_by_missing_user() -> JsonApiError {
    missing_user_id()
}

fn missing_user_id() -> JsonApiError {
    JsonApiError::bad_request("User ID required")
}

#[utoipa::path(
    get, path = "/api/plans", tag = "plans",
    responses(
        (status = 200, description = "Names of all saved plans", body = [String]),
        (status = 500, description = "Store error")
    )
)]
pub async fn list_names(State(state): State<ServerState>) -> Result<Json<Vec<String>>, JsonApiError> {
    Ok(Json(state.plans.list_names().await?))
}

#[utoipa::path(
    get, path = "/api/plans/name/{name}", tag = "plans",
    params(("name" = String, Path, description = "Plan name")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PlanDoc),
        (status = 404, description = "Plan not found")
    )
)]
pub async fn get_by_name(State(state): State<ServerState>, Path(name): Path<String>) -> Result<Json<Plan>, JsonApiError> {
    Ok(Json(state.plans.get_by_name(&name).await?))
}
