use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::items::{CreateItemRequest, ItemList, UpdateItemRequest},
    error::AppResult,
    models::ItemResponse,
    response::ApiResponse,
    routes::extract::{AppJson, AppPath},
    services::item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
}

#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "List items with their provider", body = ApiResponse<ItemList>),
        (status = 500, description = "An item points at a missing provider"),
    ),
    tag = "Items"
)]
pub async fn list_items(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ItemList>>> {
    let resp = item_service::list_items(&state.store()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Get item", body = ApiResponse<ItemResponse>),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<ItemResponse>>> {
    let resp = item_service::get_item(&state.store(), id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Create item", body = ApiResponse<ItemResponse>),
        (status = 400, description = "Provider does not exist"),
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateItemRequest>,
) -> AppResult<Json<ApiResponse<ItemResponse>>> {
    let resp = item_service::create_item(&state.store(), payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Update item", body = ApiResponse<ItemResponse>),
        (status = 400, description = "Provider does not exist"),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateItemRequest>,
) -> AppResult<Json<ApiResponse<ItemResponse>>> {
    let resp = item_service::update_item(&state.store(), id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 404, description = "Item not found"),
    ),
    tag = "Items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = item_service::delete_item(&state.store(), id).await?;
    Ok(Json(resp))
}
