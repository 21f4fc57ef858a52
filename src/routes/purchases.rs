use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::purchases::{PurchaseList, PurchaseRequest},
    error::AppResult,
    models::PurchaseResponse,
    response::ApiResponse,
    routes::extract::{AppJson, AppPath},
    services::purchase_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_purchases).post(create_purchase))
        .route(
            "/{id}",
            get(get_purchase).put(update_purchase).delete(delete_purchase),
        )
}

#[utoipa::path(
    get,
    path = "/api/purchases",
    responses(
        (status = 200, description = "List purchases with user and provider", body = ApiResponse<PurchaseList>)
    ),
    tag = "Purchases"
)]
pub async fn list_purchases(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PurchaseList>>> {
    let resp = purchase_service::list_purchases(&state.store()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/purchases/{id}",
    params(
        ("id" = Uuid, Path, description = "Purchase ID")
    ),
    responses(
        (status = 200, description = "Get purchase", body = ApiResponse<PurchaseResponse>),
        (status = 404, description = "Purchase not found"),
        (status = 500, description = "User or provider of the purchase is missing"),
    ),
    tag = "Purchases"
)]
pub async fn get_purchase(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<PurchaseResponse>>> {
    let resp = purchase_service::get_purchase(&state.store(), id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/purchases",
    request_body = PurchaseRequest,
    responses(
        (status = 200, description = "Create purchase", body = ApiResponse<PurchaseResponse>),
        (status = 400, description = "User or provider does not exist"),
    ),
    tag = "Purchases"
)]
pub async fn create_purchase(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PurchaseRequest>,
) -> AppResult<Json<ApiResponse<PurchaseResponse>>> {
    let resp = purchase_service::create_purchase(&state.store(), payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/purchases/{id}",
    params(
        ("id" = Uuid, Path, description = "Purchase ID")
    ),
    request_body = PurchaseRequest,
    responses(
        (status = 200, description = "Update purchase; the date is preserved", body = ApiResponse<PurchaseResponse>),
        (status = 400, description = "User or provider does not exist"),
        (status = 404, description = "Purchase not found"),
    ),
    tag = "Purchases"
)]
pub async fn update_purchase(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<PurchaseRequest>,
) -> AppResult<Json<ApiResponse<PurchaseResponse>>> {
    let resp = purchase_service::update_purchase(&state.store(), id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/purchases/{id}",
    params(
        ("id" = Uuid, Path, description = "Purchase ID")
    ),
    responses(
        (status = 200, description = "Purchase deleted"),
        (status = 404, description = "Purchase not found"),
    ),
    tag = "Purchases"
)]
pub async fn delete_purchase(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = purchase_service::delete_purchase(&state.store(), id).await?;
    Ok(Json(resp))
}
