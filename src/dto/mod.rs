pub mod items;
pub mod providers;
pub mod purchase_details;
pub mod purchases;
pub mod purchases_v2;
pub mod users;
