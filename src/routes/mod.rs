use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod extract;
pub mod health;
pub mod items;
pub mod providers;
pub mod purchase_details;
pub mod purchases;
pub mod purchases_v2;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/providers", providers::router())
        .nest("/items", items::router())
        .nest("/purchases", purchases::router())
        .nest("/purchasedetails", purchase_details::router())
        .nest("/v2/purchases", purchases_v2::router())
}
