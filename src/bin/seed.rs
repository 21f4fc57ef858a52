use anyhow::Context;
use purchasing_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        items::CreateItemRequest,
        providers::CreateProviderRequest,
        purchase_details::CreatePurchaseDetailRequest,
        purchases::PurchaseRequest,
        purchases_v2::{CreatePurchaseV2Request, PurchaseLineV2Request},
        users::CreateUserRequest,
    },
    models::Role,
    repository::{Repository, Store, orm::OrmStore},
    services::{
        item_service, provider_service, purchase_detail_service, purchase_service,
        purchase_v2_service, user_service,
    },
};
use rust_decimal::Decimal;

// Writes go through the services so the seeded data obeys the same
// reference and pricing rules as API traffic.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let store = OrmStore::new(orm);

    if !store.providers().find_all().await?.is_empty() {
        println!("Database already has providers, skipping seed");
        return Ok(());
    }

    let provider = provider_service::create_provider(
        &store,
        CreateProviderRequest {
            name: "Acme Supplies".into(),
            address: "12 Industrial Ave".into(),
            telephone: "555-0100".into(),
        },
    )
    .await?
    .data
    .context("provider")?;

    let user = user_service::create_user(
        &store,
        CreateUserRequest {
            name: "Buyer".into(),
            email: "buyer@example.com".into(),
            password: "buyer123".into(),
            address: "1 Main St".into(),
            telephone: "555-0199".into(),
            role: Role {
                name: "purchasing".into(),
            },
        },
    )
    .await?
    .data
    .context("user")?;

    let mut item_ids = Vec::new();
    for (name, code, price) in [
        ("Copy paper", "PAP-A4", Decimal::new(550, 2)),
        ("Toner", "TNR-01", Decimal::new(4999, 2)),
    ] {
        let item = item_service::create_item(
            &store,
            CreateItemRequest {
                name: name.into(),
                code: code.into(),
                unit_measure: "unit".into(),
                price,
                description: String::new(),
                provider_id: provider.id,
            },
        )
        .await?
        .data
        .context("item")?;
        item_ids.push(item.id);
    }

    let purchase = purchase_service::create_purchase(
        &store,
        PurchaseRequest {
            purchase_order: "PO-0001".into(),
            status: "pending".into(),
            user_id: user.id,
            provider_id: provider.id,
        },
    )
    .await?
    .data
    .context("purchase")?
    .purchase;

    for item_id in &item_ids {
        purchase_detail_service::create_purchase_detail(
            &store,
            CreatePurchaseDetailRequest {
                quantity: 2,
                item_id: *item_id,
                purchase_id: purchase.id,
            },
        )
        .await?;
    }

    let v2 = purchase_v2_service::create_purchase_v2(
        &store,
        CreatePurchaseV2Request {
            purchase_order: "PO-0002".into(),
            status: "pending".into(),
            user_id: user.id,
            provider_id: provider.id,
            item_list: item_ids
                .iter()
                .map(|item_id| PurchaseLineV2Request {
                    item_id: *item_id,
                    quantity: 3,
                    subtotal: Decimal::ZERO,
                })
                .collect(),
        },
    )
    .await?
    .data
    .context("purchase v2")?;

    println!(
        "Seed completed. Provider ID: {}, User ID: {}, PO-0002 total: {}",
        provider.id, user.id, v2.purchase.total
    );
    Ok(())
}
