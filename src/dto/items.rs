use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::ItemResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub name: String,
    pub code: String,
    pub unit_measure: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    pub provider_id: Uuid,
}

/// Absent fields keep their stored value. A new `provider_id` is validated.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub code: Option<String>,
    pub unit_measure: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub provider_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ItemList {
    #[schema(value_type = Vec<ItemResponse>)]
    pub items: Vec<ItemResponse>,
}
