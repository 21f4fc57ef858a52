use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::PurchaseResponse;

/// Body for both create and update. The date is always assigned by the server.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PurchaseRequest {
    pub purchase_order: String,
    pub status: String,
    pub user_id: Uuid,
    pub provider_id: Uuid,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct PurchaseList {
    #[schema(value_type = Vec<PurchaseResponse>)]
    pub items: Vec<PurchaseResponse>,
}
