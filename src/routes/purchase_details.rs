use axum::{
    Json, Router,
    extract::State,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::purchase_details::{
        CreatePurchaseDetailRequest, PurchaseDetailList, UpdatePurchaseDetailRequest,
    },
    error::AppResult,
    models::PurchaseDetailResponse,
    response::ApiResponse,
    routes::extract::{AppJson, AppPath},
    services::purchase_detail_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_purchase_details).post(create_purchase_detail))
        .route(
            "/{id}",
            get(get_purchase_detail)
                .put(update_purchase_detail)
                .delete(delete_purchase_detail),
        )
}

#[utoipa::path(
    get,
    path = "/api/purchasedetails",
    responses(
        (status = 200, description = "List purchase details with item and purchase", body = ApiResponse<PurchaseDetailList>)
    ),
    tag = "Purchase details"
)]
pub async fn list_purchase_details(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<PurchaseDetailList>>> {
    let resp = purchase_detail_service::list_purchase_details(&state.store()).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/purchasedetails/{id}",
    params(
        ("id" = Uuid, Path, description = "Purchase detail ID")
    ),
    responses(
        (status = 200, description = "Get purchase detail", body = ApiResponse<PurchaseDetailResponse>),
        (status = 404, description = "Purchase detail not found"),
    ),
    tag = "Purchase details"
)]
pub async fn get_purchase_detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<PurchaseDetailResponse>>> {
    let resp = purchase_detail_service::get_purchase_detail(&state.store(), id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/purchasedetails",
    request_body = CreatePurchaseDetailRequest,
    responses(
        (status = 200, description = "Create purchase detail priced from the item", body = ApiResponse<PurchaseDetailResponse>),
        (status = 400, description = "Missing item or purchase, or mismatched providers"),
    ),
    tag = "Purchase details"
)]
pub async fn create_purchase_detail(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePurchaseDetailRequest>,
) -> AppResult<Json<ApiResponse<PurchaseDetailResponse>>> {
    let resp = purchase_detail_service::create_purchase_detail(&state.store(), payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/purchasedetails/{id}",
    params(
        ("id" = Uuid, Path, description = "Purchase detail ID")
    ),
    request_body = UpdatePurchaseDetailRequest,
    responses(
        (status = 200, description = "Change quantity and re-price", body = ApiResponse<PurchaseDetailResponse>),
        (status = 404, description = "Purchase detail not found"),
    ),
    tag = "Purchase details"
)]
pub async fn update_purchase_detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdatePurchaseDetailRequest>,
) -> AppResult<Json<ApiResponse<PurchaseDetailResponse>>> {
    let resp =
        purchase_detail_service::update_purchase_detail(&state.store(), id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/purchasedetails/{id}",
    params(
        ("id" = Uuid, Path, description = "Purchase detail ID")
    ),
    responses(
        (status = 200, description = "Purchase detail deleted"),
        (status = 404, description = "Purchase detail not found"),
    ),
    tag = "Purchase details"
)]
pub async fn delete_purchase_detail(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = purchase_detail_service::delete_purchase_detail(&state.store(), id).await?;
    Ok(Json(resp))
}
