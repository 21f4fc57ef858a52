use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::PurchaseDetailResponse;

/// The total is always computed from the item price; none is accepted here.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePurchaseDetailRequest {
    pub quantity: i32,
    pub item_id: Uuid,
    pub purchase_id: Uuid,
}

/// Only the quantity of an existing detail can change. Item and purchase ids
/// sent alongside it are accepted and ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePurchaseDetailRequest {
    pub quantity: i32,
    pub item_id: Option<Uuid>,
    pub purchase_id: Option<Uuid>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct PurchaseDetailList {
    #[schema(value_type = Vec<PurchaseDetailResponse>)]
    pub items: Vec<PurchaseDetailResponse>,
}
