pub mod items;
pub mod providers;
pub mod purchase_details;
pub mod purchases;
pub mod purchases_v2;
pub mod users;

pub use items::Entity as Items;
pub use providers::Entity as Providers;
pub use purchase_details::Entity as PurchaseDetails;
pub use purchases::Entity as Purchases;
pub use purchases_v2::Entity as PurchasesV2;
pub use users::Entity as Users;
