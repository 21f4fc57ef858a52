use uuid::Uuid;

use crate::{
    dto::purchase_details::{
        CreatePurchaseDetailRequest, PurchaseDetailList, UpdatePurchaseDetailRequest,
    },
    error::{AppError, AppResult},
    models::{PurchaseDetail, PurchaseDetailResponse},
    repository::{PurchaseDetailRepository, Repository, Store},
    response::{ApiResponse, Meta},
    services::{pricing::line_subtotal, references::ReferenceValidator},
};

async fn detail_view<S: Store>(
    store: &S,
    purchase_detail: PurchaseDetail,
) -> AppResult<PurchaseDetailResponse> {
    let item = store.items().resolve(purchase_detail.item_id, "item").await?;
    let purchase = store
        .purchases()
        .resolve(purchase_detail.purchase_id, "purchase")
        .await?;
    Ok(PurchaseDetailResponse {
        purchase_detail,
        item,
        purchase,
    })
}

pub async fn list_purchase_details<S: Store>(
    store: &S,
) -> AppResult<ApiResponse<PurchaseDetailList>> {
    let mut items = Vec::new();
    for detail in store.purchase_details().find_all().await? {
        items.push(detail_view(store, detail).await?);
    }
    let len = items.len();
    Ok(ApiResponse::list(
        "Purchase details",
        PurchaseDetailList { items },
        len,
    ))
}

pub async fn get_purchase_detail<S: Store>(
    store: &S,
    id: Uuid,
) -> AppResult<ApiResponse<PurchaseDetailResponse>> {
    let detail = match store.purchase_details().find_by_id(id).await? {
        Some(d) => d,
        None => return Err(AppError::NotFound("Purchase detail")),
    };
    Ok(ApiResponse::success(
        "Purchase detail",
        detail_view(store, detail).await?,
        None,
    ))
}

/// The item must be sold by the purchase's provider. The line total is
/// priced from the item as it is stored right now.
pub async fn create_purchase_detail<S: Store>(
    store: &S,
    payload: CreatePurchaseDetailRequest,
) -> AppResult<ApiResponse<PurchaseDetailResponse>> {
    store.items().ensure_exists(payload.item_id, "Item").await?;
    store
        .purchases()
        .ensure_exists(payload.purchase_id, "Purchase")
        .await?;

    let item = store.items().resolve(payload.item_id, "item").await?;
    let purchase = store
        .purchases()
        .resolve(payload.purchase_id, "purchase")
        .await?;
    if item.provider_id != purchase.provider_id {
        return Err(AppError::InvalidReference(
            "Item and Purchase have different providers".into(),
        ));
    }

    let detail = PurchaseDetail {
        id: Uuid::now_v7(),
        quantity: payload.quantity,
        total: line_subtotal(item.price, payload.quantity)?,
        item_id: item.id,
        purchase_id: purchase.id,
    };
    store.purchase_details().insert(&detail).await?;
    tracing::info!(
        detail_id = %detail.id,
        purchase_id = %purchase.id,
        total = %detail.total,
        "purchase detail created"
    );

    Ok(ApiResponse::success(
        "Purchase detail created",
        PurchaseDetailResponse {
            purchase_detail: detail,
            item,
            purchase,
        },
        Some(Meta::empty()),
    ))
}

/// Changes the quantity and re-prices the line from the item's current price.
pub async fn update_purchase_detail<S: Store>(
    store: &S,
    id: Uuid,
    payload: UpdatePurchaseDetailRequest,
) -> AppResult<ApiResponse<PurchaseDetailResponse>> {
    let mut detail = match store.purchase_details().find_by_id(id).await? {
        Some(d) => d,
        None => return Err(AppError::NotFound("Purchase detail")),
    };
    if payload.item_id.is_some_and(|item_id| item_id != detail.item_id)
        || payload
            .purchase_id
            .is_some_and(|purchase_id| purchase_id != detail.purchase_id)
    {
        tracing::debug!(detail_id = %id, "ignoring reference change on purchase detail update");
    }

    let item = store.items().resolve(detail.item_id, "item").await?;
    detail.quantity = payload.quantity;
    detail.total = line_subtotal(item.price, payload.quantity)?;

    if !store
        .purchase_details()
        .update_quantity(id, detail.quantity, detail.total)
        .await?
    {
        return Err(AppError::NotFound("Purchase detail"));
    }

    let purchase = store
        .purchases()
        .resolve(detail.purchase_id, "purchase")
        .await?;
    Ok(ApiResponse::success(
        "Purchase detail updated",
        PurchaseDetailResponse {
            purchase_detail: detail,
            item,
            purchase,
        },
        Some(Meta::empty()),
    ))
}

pub async fn delete_purchase_detail<S: Store>(
    store: &S,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !store.purchase_details().delete(id).await? {
        return Err(AppError::NotFound("Purchase detail"));
    }
    tracing::info!(detail_id = %id, "purchase detail deleted");
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
