use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Provider;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProviderRequest {
    pub name: String,
    pub address: String,
    pub telephone: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProviderRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProviderList {
    #[schema(value_type = Vec<Provider>)]
    pub items: Vec<Provider>,
}
