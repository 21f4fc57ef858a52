use chrono::Utc;
use uuid::Uuid;

use crate::{
    dto::purchases::{PurchaseList, PurchaseRequest},
    error::{AppError, AppResult},
    models::{Purchase, PurchaseResponse},
    repository::{Repository, Store},
    response::{ApiResponse, Meta},
    services::references::ReferenceValidator,
};

async fn purchase_view<S: Store>(store: &S, purchase: Purchase) -> AppResult<PurchaseResponse> {
    let user = store.users().resolve(purchase.user_id, "user").await?;
    let provider = store
        .providers()
        .resolve(purchase.provider_id, "provider")
        .await?;
    Ok(PurchaseResponse {
        purchase,
        user,
        provider,
    })
}

pub async fn list_purchases<S: Store>(store: &S) -> AppResult<ApiResponse<PurchaseList>> {
    let mut items = Vec::new();
    for purchase in store.purchases().find_all().await? {
        items.push(purchase_view(store, purchase).await?);
    }
    let len = items.len();
    Ok(ApiResponse::list("Purchases", PurchaseList { items }, len))
}

pub async fn get_purchase<S: Store>(
    store: &S,
    id: Uuid,
) -> AppResult<ApiResponse<PurchaseResponse>> {
    let purchase = match store.purchases().find_by_id(id).await? {
        Some(p) => p,
        None => return Err(AppError::NotFound("Purchase")),
    };
    Ok(ApiResponse::success(
        "Purchase",
        purchase_view(store, purchase).await?,
        None,
    ))
}

pub async fn create_purchase<S: Store>(
    store: &S,
    payload: PurchaseRequest,
) -> AppResult<ApiResponse<PurchaseResponse>> {
    store.users().ensure_exists(payload.user_id, "User").await?;
    store
        .providers()
        .ensure_exists(payload.provider_id, "Provider")
        .await?;

    let purchase = Purchase {
        id: Uuid::now_v7(),
        purchase_order: payload.purchase_order,
        date: Utc::now(),
        status: payload.status,
        user_id: payload.user_id,
        provider_id: payload.provider_id,
    };
    store.purchases().insert(&purchase).await?;
    tracing::info!(
        purchase_id = %purchase.id,
        purchase_order = %purchase.purchase_order,
        "purchase created"
    );

    Ok(ApiResponse::success(
        "Purchase created",
        purchase_view(store, purchase).await?,
        Some(Meta::empty()),
    ))
}

/// Replaces every client-editable field. The creation date is kept, and a
/// reference is only re-checked when it changes.
pub async fn update_purchase<S: Store>(
    store: &S,
    id: Uuid,
    payload: PurchaseRequest,
) -> AppResult<ApiResponse<PurchaseResponse>> {
    let existing = match store.purchases().find_by_id(id).await? {
        Some(p) => p,
        None => return Err(AppError::NotFound("Purchase")),
    };

    if payload.user_id != existing.user_id {
        store.users().ensure_exists(payload.user_id, "User").await?;
    }
    if payload.provider_id != existing.provider_id {
        store
            .providers()
            .ensure_exists(payload.provider_id, "Provider")
            .await?;
    }

    let purchase = Purchase {
        id,
        purchase_order: payload.purchase_order,
        date: existing.date,
        status: payload.status,
        user_id: payload.user_id,
        provider_id: payload.provider_id,
    };
    if !store.purchases().replace(&purchase).await? {
        return Err(AppError::NotFound("Purchase"));
    }

    Ok(ApiResponse::success(
        "Purchase updated",
        purchase_view(store, purchase).await?,
        Some(Meta::empty()),
    ))
}

/// Details pointing at the purchase are not removed.
pub async fn delete_purchase<S: Store>(
    store: &S,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !store.purchases().delete(id).await? {
        return Err(AppError::NotFound("Purchase"));
    }
    tracing::info!(purchase_id = %id, "purchase deleted");
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
