use uuid::Uuid;

use crate::{
    dto::providers::{CreateProviderRequest, ProviderList, UpdateProviderRequest},
    error::{AppError, AppResult},
    models::Provider,
    repository::{Repository, Store},
    response::{ApiResponse, Meta},
};

pub async fn list_providers<S: Store>(store: &S) -> AppResult<ApiResponse<ProviderList>> {
    let items = store.providers().find_all().await?;
    let len = items.len();
    Ok(ApiResponse::list("Providers", ProviderList { items }, len))
}

pub async fn get_provider<S: Store>(store: &S, id: Uuid) -> AppResult<ApiResponse<Provider>> {
    let provider = match store.providers().find_by_id(id).await? {
        Some(p) => p,
        None => return Err(AppError::NotFound("Provider")),
    };
    Ok(ApiResponse::success("Provider", provider, None))
}

pub async fn create_provider<S: Store>(
    store: &S,
    payload: CreateProviderRequest,
) -> AppResult<ApiResponse<Provider>> {
    let provider = Provider {
        id: Uuid::now_v7(),
        name: payload.name,
        address: payload.address,
        telephone: payload.telephone,
    };
    store.providers().insert(&provider).await?;
    tracing::info!(provider_id = %provider.id, "provider created");

    Ok(ApiResponse::success(
        "Provider created",
        provider,
        Some(Meta::empty()),
    ))
}

pub async fn update_provider<S: Store>(
    store: &S,
    id: Uuid,
    payload: UpdateProviderRequest,
) -> AppResult<ApiResponse<Provider>> {
    let mut provider = match store.providers().find_by_id(id).await? {
        Some(p) => p,
        None => return Err(AppError::NotFound("Provider")),
    };

    if let Some(name) = payload.name {
        provider.name = name;
    }
    if let Some(address) = payload.address {
        provider.address = address;
    }
    if let Some(telephone) = payload.telephone {
        provider.telephone = telephone;
    }

    if !store.providers().replace(&provider).await? {
        return Err(AppError::NotFound("Provider"));
    }

    Ok(ApiResponse::success(
        "Provider updated",
        provider,
        Some(Meta::empty()),
    ))
}

/// Items and purchases pointing at the provider are left in place; reads of
/// those will report the dangling reference.
pub async fn delete_provider<S: Store>(
    store: &S,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !store.providers().delete(id).await? {
        return Err(AppError::NotFound("Provider"));
    }
    tracing::info!(provider_id = %id, "provider deleted");
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
