pub mod plans;

use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use common::types::Health;
use service::plan::{repository::PlanRepository, PlanService};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

/// Shared handler state: the plan store, injected once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub plans: PlanService<dyn PlanRepository>,
}

impl ServerState {
    pub fn new(repo: Arc<dyn PlanRepository>) -> Self {
        Self { plans: PlanService::new(repo) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, plan CRUD and the OpenAPI document
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/plans", get(plans::list_names).post(plans::create))
        .route("/plans/:id", get(plans::get).put(plans::update).delete(plans::delete))
        .route("/plans/user/", get(plans::list_by_missing_user))
        .route("/plans/user/:user_id", get(plans::list_by_user))
        .route("/plans/name/:name", get(plans::get_by_name))
        .route("/openapi.json", get(openapi_json));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
