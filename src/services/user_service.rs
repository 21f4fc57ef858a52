use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest, UserList},
    error::{AppError, AppResult},
    models::User,
    repository::{Repository, Store},
    response::{ApiResponse, Meta},
};

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

pub async fn list_users<S: Store>(store: &S) -> AppResult<ApiResponse<UserList>> {
    let items = store.users().find_all().await?;
    let len = items.len();
    Ok(ApiResponse::list("Users", UserList { items }, len))
}

pub async fn get_user<S: Store>(store: &S, id: Uuid) -> AppResult<ApiResponse<User>> {
    let user = match store.users().find_by_id(id).await? {
        Some(u) => u,
        None => return Err(AppError::NotFound("User")),
    };
    Ok(ApiResponse::success("User", user, None))
}

pub async fn create_user<S: Store>(
    store: &S,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let user = User {
        id: Uuid::now_v7(),
        name: payload.name,
        email: payload.email,
        password_hash: hash_password(&payload.password)?,
        address: payload.address,
        telephone: payload.telephone,
        role: payload.role,
    };
    store.users().insert(&user).await?;
    tracing::info!(user_id = %user.id, "user created");

    Ok(ApiResponse::success(
        "User created",
        user,
        Some(Meta::empty()),
    ))
}

pub async fn update_user<S: Store>(
    store: &S,
    id: Uuid,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let mut user = match store.users().find_by_id(id).await? {
        Some(u) => u,
        None => return Err(AppError::NotFound("User")),
    };

    if let Some(name) = payload.name {
        user.name = name;
    }
    if let Some(email) = payload.email {
        user.email = email;
    }
    if let Some(password) = payload.password {
        user.password_hash = hash_password(&password)?;
    }
    if let Some(address) = payload.address {
        user.address = address;
    }
    if let Some(telephone) = payload.telephone {
        user.telephone = telephone;
    }
    if let Some(role) = payload.role {
        user.role = role;
    }

    if !store.users().replace(&user).await? {
        return Err(AppError::NotFound("User"));
    }

    Ok(ApiResponse::success(
        "User updated",
        user,
        Some(Meta::empty()),
    ))
}

pub async fn delete_user<S: Store>(store: &S, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    if !store.users().delete(id).await? {
        return Err(AppError::NotFound("User"));
    }
    tracing::info!(user_id = %id, "user deleted");
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
