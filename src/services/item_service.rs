use uuid::Uuid;

use crate::{
    dto::items::{CreateItemRequest, ItemList, UpdateItemRequest},
    error::{AppError, AppResult},
    models::{Item, ItemResponse},
    repository::{Repository, Store},
    response::{ApiResponse, Meta},
    services::references::ReferenceValidator,
};

async fn item_view<S: Store>(store: &S, item: Item) -> AppResult<ItemResponse> {
    let provider = store.providers().resolve(item.provider_id, "provider").await?;
    Ok(ItemResponse {
        id: item.id,
        item,
        provider,
    })
}

pub async fn list_items<S: Store>(store: &S) -> AppResult<ApiResponse<ItemList>> {
    let mut items = Vec::new();
    for item in store.items().find_all().await? {
        items.push(item_view(store, item).await?);
    }
    let len = items.len();
    Ok(ApiResponse::list("Items", ItemList { items }, len))
}

pub async fn get_item<S: Store>(store: &S, id: Uuid) -> AppResult<ApiResponse<ItemResponse>> {
    let item = match store.items().find_by_id(id).await? {
        Some(i) => i,
        None => return Err(AppError::NotFound("Item")),
    };
    Ok(ApiResponse::success("Item", item_view(store, item).await?, None))
}

pub async fn create_item<S: Store>(
    store: &S,
    payload: CreateItemRequest,
) -> AppResult<ApiResponse<ItemResponse>> {
    store
        .providers()
        .ensure_exists(payload.provider_id, "Provider")
        .await?;

    let item = Item {
        id: Uuid::now_v7(),
        name: payload.name,
        code: payload.code,
        unit_measure: payload.unit_measure,
        price: payload.price,
        description: payload.description,
        provider_id: payload.provider_id,
    };
    store.items().insert(&item).await?;
    tracing::info!(item_id = %item.id, provider_id = %item.provider_id, "item created");

    Ok(ApiResponse::success(
        "Item created",
        item_view(store, item).await?,
        Some(Meta::empty()),
    ))
}

pub async fn update_item<S: Store>(
    store: &S,
    id: Uuid,
    payload: UpdateItemRequest,
) -> AppResult<ApiResponse<ItemResponse>> {
    let mut item = match store.items().find_by_id(id).await? {
        Some(i) => i,
        None => return Err(AppError::NotFound("Item")),
    };

    if let Some(provider_id) = payload.provider_id {
        if provider_id != item.provider_id {
            store.providers().ensure_exists(provider_id, "Provider").await?;
            item.provider_id = provider_id;
        }
    }
    if let Some(name) = payload.name {
        item.name = name;
    }
    if let Some(code) = payload.code {
        item.code = code;
    }
    if let Some(unit_measure) = payload.unit_measure {
        item.unit_measure = unit_measure;
    }
    if let Some(price) = payload.price {
        item.price = price;
    }
    if let Some(description) = payload.description {
        item.description = description;
    }

    if !store.items().replace(&item).await? {
        return Err(AppError::NotFound("Item"));
    }

    Ok(ApiResponse::success(
        "Item updated",
        item_view(store, item).await?,
        Some(Meta::empty()),
    ))
}

pub async fn delete_item<S: Store>(store: &S, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    if !store.items().delete(id).await? {
        return Err(AppError::NotFound("Item"));
    }
    tracing::info!(item_id = %id, "item deleted");
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
