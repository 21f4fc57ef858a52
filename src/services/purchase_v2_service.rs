//! Purchases that embed their lines. Subtotals and the total are priced once,
//! at creation, and stored as a snapshot: later item price changes never
//! touch them. Reads hydrate every line with its current item.

use chrono::Utc;
use uuid::Uuid;

use crate::{
    dto::purchases_v2::{CreatePurchaseV2Request, PurchaseV2List, UpdatePurchaseV2Request},
    error::{AppError, AppResult},
    models::{PurchaseLineV2, PurchaseResponseV2, PurchaseV2},
    repository::{PurchaseV2Repository, Repository, Store},
    response::{ApiResponse, Meta},
    services::{
        pricing::{line_subtotal, order_total},
        references::ReferenceValidator,
    },
};

/// Joins user and provider; lines are returned as stored.
async fn purchase_view<S: Store>(store: &S, purchase: PurchaseV2) -> AppResult<PurchaseResponseV2> {
    let user = store.users().resolve(purchase.user_id, "user").await?;
    let provider = store
        .providers()
        .resolve(purchase.provider_id, "provider")
        .await?;
    Ok(PurchaseResponseV2 {
        purchase,
        user,
        provider,
    })
}

async fn hydrated_view<S: Store>(
    store: &S,
    mut purchase: PurchaseV2,
) -> AppResult<PurchaseResponseV2> {
    for line in purchase.item_list.iter_mut() {
        line.item = Some(store.items().resolve(line.item_id, "item").await?);
    }
    purchase_view(store, purchase).await
}

pub async fn list_purchases_v2<S: Store>(store: &S) -> AppResult<ApiResponse<PurchaseV2List>> {
    let mut items = Vec::new();
    for purchase in store.purchases_v2().find_all().await? {
        items.push(hydrated_view(store, purchase).await?);
    }
    let len = items.len();
    Ok(ApiResponse::list("Purchases", PurchaseV2List { items }, len))
}

pub async fn get_purchase_v2<S: Store>(
    store: &S,
    purchase_order: &str,
) -> AppResult<ApiResponse<PurchaseResponseV2>> {
    let purchase = match store.purchases_v2().find_by_order_code(purchase_order).await? {
        Some(p) => p,
        None => return Err(AppError::NotFound("Purchase")),
    };
    Ok(ApiResponse::success(
        "Purchase",
        hydrated_view(store, purchase).await?,
        None,
    ))
}

pub async fn create_purchase_v2<S: Store>(
    store: &S,
    payload: CreatePurchaseV2Request,
) -> AppResult<ApiResponse<PurchaseResponseV2>> {
    store.users().ensure_exists(payload.user_id, "User").await?;
    store
        .providers()
        .ensure_exists(payload.provider_id, "Provider")
        .await?;

    let mut item_list = Vec::with_capacity(payload.item_list.len());
    for line in payload.item_list {
        store.items().ensure_exists(line.item_id, "Item").await?;
        let item = store.items().resolve(line.item_id, "item").await?;
        item_list.push(PurchaseLineV2 {
            item_id: line.item_id,
            item: None,
            quantity: line.quantity,
            subtotal: line_subtotal(item.price, line.quantity)?,
        });
    }
    let total = order_total(item_list.iter().map(|line| line.subtotal))?;

    let purchase = PurchaseV2 {
        id: Uuid::now_v7(),
        purchase_order: payload.purchase_order,
        date: Utc::now(),
        status: payload.status,
        item_list,
        total,
        user_id: payload.user_id,
        provider_id: payload.provider_id,
    };
    store.purchases_v2().insert(&purchase).await?;
    tracing::info!(
        purchase_id = %purchase.id,
        purchase_order = %purchase.purchase_order,
        lines = purchase.item_list.len(),
        total = %purchase.total,
        "purchase v2 created"
    );

    Ok(ApiResponse::success(
        "Purchase created",
        hydrated_view(store, purchase).await?,
        Some(Meta::empty()),
    ))
}

/// Full replace. Lines and total are stored exactly as submitted, without
/// re-pricing or checking the items, and the response does not hydrate them.
pub async fn update_purchase_v2<S: Store>(
    store: &S,
    id: Uuid,
    payload: UpdatePurchaseV2Request,
) -> AppResult<ApiResponse<PurchaseResponseV2>> {
    let existing = match store.purchases_v2().find_by_id(id).await? {
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

    let purchase = PurchaseV2 {
        id,
        purchase_order: payload.purchase_order,
        date: existing.date,
        status: payload.status,
        item_list: payload
            .item_list
            .into_iter()
            .map(|line| PurchaseLineV2 {
                item_id: line.item_id,
                item: None,
                quantity: line.quantity,
                subtotal: line.subtotal,
            })
            .collect(),
        total: payload.total,
        user_id: payload.user_id,
        provider_id: payload.provider_id,
    };
    if !store.purchases_v2().replace(&purchase).await? {
        return Err(AppError::NotFound("Purchase"));
    }

    Ok(ApiResponse::success(
        "Purchase updated",
        purchase_view(store, purchase).await?,
        Some(Meta::empty()),
    ))
}
