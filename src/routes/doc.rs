use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        items::{CreateItemRequest, ItemList, UpdateItemRequest},
        providers::{CreateProviderRequest, ProviderList, UpdateProviderRequest},
        purchase_details::{
            CreatePurchaseDetailRequest, PurchaseDetailList, UpdatePurchaseDetailRequest,
        },
        purchases::{PurchaseList, PurchaseRequest},
        purchases_v2::{
            CreatePurchaseV2Request, PurchaseLineV2Request, PurchaseV2List,
            UpdatePurchaseV2Request,
        },
        users::{CreateUserRequest, UpdateUserRequest, UserList},
    },
    models::{
        Item, ItemResponse, Provider, Purchase, PurchaseDetail, PurchaseDetailResponse,
        PurchaseLineV2, PurchaseResponse, PurchaseResponseV2, PurchaseV2, Role, User,
    },
    response::{ApiResponse, Meta},
    routes::{health, items, providers, purchase_details, purchases, purchases_v2, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        providers::list_providers,
        providers::get_provider,
        providers::create_provider,
        providers::update_provider,
        providers::delete_provider,
        items::list_items,
        items::get_item,
        items::create_item,
        items::update_item,
        items::delete_item,
        purchases::list_purchases,
        purchases::get_purchase,
        purchases::create_purchase,
        purchases::update_purchase,
        purchases::delete_purchase,
        purchase_details::list_purchase_details,
        purchase_details::get_purchase_detail,
        purchase_details::create_purchase_detail,
        purchase_details::update_purchase_detail,
        purchase_details::delete_purchase_detail,
        purchases_v2::list_purchases_v2,
        purchases_v2::get_purchase_v2,
        purchases_v2::create_purchase_v2,
        purchases_v2::update_purchase_v2
    ),
    components(
        schemas(
            Role,
            User,
            Provider,
            Item,
            Purchase,
            PurchaseDetail,
            PurchaseV2,
            PurchaseLineV2,
            ItemResponse,
            PurchaseResponse,
            PurchaseDetailResponse,
            PurchaseResponseV2,
            CreateUserRequest,
            UpdateUserRequest,
            CreateProviderRequest,
            UpdateProviderRequest,
            CreateItemRequest,
            UpdateItemRequest,
            PurchaseRequest,
            CreatePurchaseDetailRequest,
            UpdatePurchaseDetailRequest,
            CreatePurchaseV2Request,
            UpdatePurchaseV2Request,
            PurchaseLineV2Request,
            UserList,
            ProviderList,
            ItemList,
            PurchaseList,
            PurchaseDetailList,
            PurchaseV2List,
            health::HealthData,
            Meta,
            ApiResponse<ItemResponse>,
            ApiResponse<PurchaseResponse>,
            ApiResponse<PurchaseDetailResponse>,
            ApiResponse<PurchaseResponseV2>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Providers", description = "Provider endpoints"),
        (name = "Items", description = "Item endpoints"),
        (name = "Purchases", description = "Purchase endpoints"),
        (name = "Purchase details", description = "Purchase line endpoints"),
        (name = "Purchases v2", description = "Purchases with embedded lines"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
