use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2 hash; never leaves the service.
    #[serde(skip)]
    pub password_hash: String,
    pub address: String,
    pub telephone: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Provider {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub telephone: String,
}

/// An item sold by a single provider. The ids are carried by the enclosing
/// view (`ItemResponse`, a detail or a v2 line) rather than by the item itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    #[serde(skip)]
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub unit_measure: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub description: String,
    #[serde(skip)]
    pub provider_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Purchase {
    pub id: Uuid,
    pub purchase_order: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub user_id: Uuid,
    pub provider_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseDetail {
    pub id: Uuid,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub total: Decimal,
    pub item_id: Uuid,
    pub purchase_id: Uuid,
}

/// A purchase that embeds its lines instead of pointing at purchase details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseV2 {
    pub id: Uuid,
    pub purchase_order: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub item_list: Vec<PurchaseLineV2>,
    #[schema(value_type = f64)]
    pub total: Decimal,
    #[serde(skip)]
    pub user_id: Uuid,
    #[serde(skip)]
    pub provider_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseLineV2 {
    pub item_id: Uuid,
    /// Hydrated on reads only; storage keeps the id, quantity and subtotal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemResponse {
    pub id: Uuid,
    pub item: Item,
    pub provider: Provider,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PurchaseResponse {
    pub purchase: Purchase,
    pub user: User,
    pub provider: Provider,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PurchaseDetailResponse {
    pub purchase_detail: PurchaseDetail,
    pub item: Item,
    pub purchase: Purchase,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PurchaseResponseV2 {
    pub purchase: PurchaseV2,
    pub user: User,
    pub provider: Provider,
}
