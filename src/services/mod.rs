pub mod item_service;
pub mod pricing;
pub mod provider_service;
pub mod purchase_detail_service;
pub mod purchase_service;
pub mod purchase_v2_service;
pub mod references;
pub mod user_service;
