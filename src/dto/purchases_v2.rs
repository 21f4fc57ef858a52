use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::PurchaseResponseV2;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PurchaseLineV2Request {
    pub item_id: Uuid,
    pub quantity: i32,
    /// Ignored on create, where it is computed. Stored verbatim on update.
    #[serde(default)]
    #[schema(value_type = f64)]
    pub subtotal: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePurchaseV2Request {
    pub purchase_order: String,
    pub status: String,
    pub user_id: Uuid,
    pub provider_id: Uuid,
    #[serde(default)]
    pub item_list: Vec<PurchaseLineV2Request>,
}

/// Replaces the stored purchase. Lines and total are written exactly as sent.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePurchaseV2Request {
    pub purchase_order: String,
    pub status: String,
    pub user_id: Uuid,
    pub provider_id: Uuid,
    #[serde(default)]
    pub item_list: Vec<PurchaseLineV2Request>,
    #[serde(default)]
    #[schema(value_type = f64)]
    pub total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct PurchaseV2List {
    #[schema(value_type = Vec<PurchaseResponseV2>)]
    pub items: Vec<PurchaseResponseV2>,
}
