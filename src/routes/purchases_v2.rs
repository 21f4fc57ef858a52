use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::purchases_v2::{CreatePurchaseV2Request, PurchaseV2List, UpdatePurchaseV2Request},
    error::AppResult,
    models::PurchaseResponseV2,
    response::ApiResponse,
    routes::extract::{AppJson, AppPath},
    services::purchase_v2_service,
    state::AppState,
};

// The segment is an order code for reads and an id for writes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_purchases_v2).post(create_purchase_v2))
        .route("/{key}", get(get_purchase_v2).put(update_purchase_v2))
}

#[utoipa::path(
    get,
    path = "/api/v2/purchases",
    responses(
        (status = 200, description = "List purchases with hydrated lines", body = ApiResponse<PurchaseV2List>),
        (status = 500, description = "A referenced user, provider or item is missing"),
    ),
    tag = "Purchases v2"
)]
pub async fn list_purchases_v2(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PurchaseV2List>>> {
    let resp = purchase_v2_service::list_purchases_v2(&state.store()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/v2/purchases/{purchase_order}",
    params(
        ("purchase_order" = String, Path, description = "Purchase order code")
    ),
    responses(
        (status = 200, description = "Get purchase by order code", body = ApiResponse<PurchaseResponseV2>),
        (status = 404, description = "Purchase not found"),
    ),
    tag = "Purchases v2"
)]
pub async fn get_purchase_v2(
    State(state): State<AppState>,
    AppPath(purchase_order): AppPath<String>,
) -> AppResult<Json<ApiResponse<PurchaseResponseV2>>> {
    let resp = purchase_v2_service::get_purchase_v2(&state.store(), &purchase_order).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/v2/purchases",
    request_body = CreatePurchaseV2Request,
    responses(
        (status = 200, description = "Create purchase; lines are priced from the items", body = ApiResponse<PurchaseResponseV2>),
        (status = 400, description = "User, provider or item does not exist"),
    ),
    tag = "Purchases v2"
)]
pub async fn create_purchase_v2(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePurchaseV2Request>,
) -> AppResult<Json<ApiResponse<PurchaseResponseV2>>> {
    let resp = purchase_v2_service::create_purchase_v2(&state.store(), payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/v2/purchases/{id}",
    params(
        ("id" = Uuid, Path, description = "Purchase ID")
    ),
    request_body = UpdatePurchaseV2Request,
    responses(
        (status = 200, description = "Replace purchase; lines are stored as sent", body = ApiResponse<PurchaseResponseV2>),
        (status = 400, description = "User or provider does not exist"),
        (status = 404, description = "Purchase not found"),
    ),
    tag = "Purchases v2"
)]
pub async fn update_purchase_v2(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdatePurchaseV2Request>,
) -> AppResult<Json<ApiResponse<PurchaseResponseV2>>> {
    let resp = purchase_v2_service::update_purchase_v2(&state.store(), id, payload).await?;
    Ok(Json(resp))
}
