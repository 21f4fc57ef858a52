use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::providers::{CreateProviderRequest, ProviderList, UpdateProviderRequest},
    error::AppResult,
    models::Provider,
    response::ApiResponse,
    routes::extract::{AppJson, AppPath},
    services::provider_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_providers).post(create_provider))
        .route(
            "/{id}",
            get(get_provider).put(update_provider).delete(delete_provider),
        )
}

#[utoipa::path(
    get,
    path = "/api/providers",
    responses(
        (status = 200, description = "List providers", body = ApiResponse<ProviderList>)
    ),
    tag = "Providers"
)]
pub async fn list_providers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProviderList>>> {
    let resp = provider_service::list_providers(&state.store()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/providers/{id}",
    params(
        ("id" = Uuid, Path, description = "Provider ID")
    ),
    responses(
        (status = 200, description = "Get provider", body = ApiResponse<Provider>),
        (status = 404, description = "Provider not found"),
    ),
    tag = "Providers"
)]
pub async fn get_provider(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<Provider>>> {
    let resp = provider_service::get_provider(&state.store(), id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/providers",
    request_body = CreateProviderRequest,
    responses(
        (status = 200, description = "Create provider", body = ApiResponse<Provider>)
    ),
    tag = "Providers"
)]
pub async fn create_provider(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProviderRequest>,
) -> AppResult<Json<ApiResponse<Provider>>> {
    let resp = provider_service::create_provider(&state.store(), payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/providers/{id}",
    params(
        ("id" = Uuid, Path, description = "Provider ID")
    ),
    request_body = UpdateProviderRequest,
    responses(
        (status = 200, description = "Update provider", body = ApiResponse<Provider>),
        (status = 404, description = "Provider not found"),
    ),
    tag = "Providers"
)]
pub async fn update_provider(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateProviderRequest>,
) -> AppResult<Json<ApiResponse<Provider>>> {
    let resp = provider_service::update_provider(&state.store(), id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/providers/{id}",
    params(
        ("id" = Uuid, Path, description = "Provider ID")
    ),
    responses(
        (status = 200, description = "Provider deleted"),
        (status = 404, description = "Provider not found"),
    ),
    tag = "Providers"
)]
pub async fn delete_provider(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = provider_service::delete_provider(&state.store(), id).await?;
    Ok(Json(resp))
}
