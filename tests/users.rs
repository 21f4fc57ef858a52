mod common;

use axum::http::StatusCode;
use common::{MemoryStore, create_provider, create_user};
use purchasing_api::{
    dto::{providers::UpdateProviderRequest, users::UpdateUserRequest},
    repository::Repository,
    services::{provider_service, user_service},
};
use uuid::Uuid;

#[tokio::test]
async fn passwords_are_hashed_and_never_serialized() {
    let store = MemoryStore::default();
    let user = create_user(&store, "buyer@example.com").await;

    let stored = store.users.find_by_id(user.id).await.unwrap().unwrap();
    assert!(stored.password_hash.starts_with("$argon2"));
    assert_ne!(stored.password_hash, "secret");

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert!(json.get("password").is_none());
    assert_eq!(json["role"]["name"], "purchasing");
}

#[tokio::test]
async fn user_update_rehashes_only_a_new_password() {
    let store = MemoryStore::default();
    let user = create_user(&store, "buyer@example.com").await;
    let original_hash = store
        .users
        .find_by_id(user.id)
        .await
        .unwrap()
        .unwrap()
        .password_hash;

    let updated = user_service::update_user(
        &store,
        user.id,
        UpdateUserRequest {
            telephone: Some("555-0123".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .data
    .unwrap();
    assert_eq!(updated.telephone, "555-0123");
    assert_eq!(updated.email, "buyer@example.com");
    assert_eq!(updated.password_hash, original_hash);

    let updated = user_service::update_user(
        &store,
        user.id,
        UpdateUserRequest {
            password: Some("changed".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .data
    .unwrap();
    assert_ne!(updated.password_hash, original_hash);
}

#[tokio::test]
async fn provider_crud() {
    let store = MemoryStore::default();
    let provider = create_provider(&store, "Acme").await;

    let renamed = provider_service::update_provider(
        &store,
        provider.id,
        UpdateProviderRequest {
            name: Some("Acme Ltd".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .data
    .unwrap();
    assert_eq!(renamed.name, "Acme Ltd");
    assert_eq!(renamed.address, provider.address);

    let list = provider_service::list_providers(&store).await.unwrap();
    assert_eq!(list.meta.unwrap().total, Some(1));

    let deleted = provider_service::delete_provider(&store, provider.id)
        .await
        .unwrap();
    assert_eq!(deleted.message, "Deleted");

    let err = provider_service::delete_provider(&store, provider.id)
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn updating_a_missing_user_is_not_found() {
    let store = MemoryStore::default();
    let err = user_service::update_user(&store, Uuid::now_v7(), UpdateUserRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.to_string(), "User not found");
}
