use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::{
    entity::{
        Items, PurchaseDetails, Purchases, PurchasesV2, Providers, Users, items, providers,
        purchase_details, purchases,
        purchases_v2::{self, LineRecord, LineRecords},
        users,
    },
    error::AppResult,
    models::{Item, Provider, Purchase, PurchaseDetail, PurchaseLineV2, PurchaseV2, Role, User},
    repository::{PurchaseDetailRepository, PurchaseV2Repository, Repository, Store},
};

/// PostgreSQL-backed store. Every repository shares the same connection pool.
#[derive(Clone)]
pub struct OrmStore {
    users: DbUserRepository,
    providers: DbProviderRepository,
    items: DbItemRepository,
    purchases: DbPurchaseRepository,
    purchase_details: DbPurchaseDetailRepository,
    purchases_v2: DbPurchaseV2Repository,
}

impl OrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: DbUserRepository { db: db.clone() },
            providers: DbProviderRepository { db: db.clone() },
            items: DbItemRepository { db: db.clone() },
            purchases: DbPurchaseRepository { db: db.clone() },
            purchase_details: DbPurchaseDetailRepository { db: db.clone() },
            purchases_v2: DbPurchaseV2Repository { db },
        }
    }
}

impl Store for OrmStore {
    type Users = DbUserRepository;
    type Providers = DbProviderRepository;
    type Items = DbItemRepository;
    type Purchases = DbPurchaseRepository;
    type PurchaseDetails = DbPurchaseDetailRepository;
    type PurchasesV2 = DbPurchaseV2Repository;

    fn users(&self) -> &Self::Users {
        &self.users
    }

    fn providers(&self) -> &Self::Providers {
        &self.providers
    }

    fn items(&self) -> &Self::Items {
        &self.items
    }

    fn purchases(&self) -> &Self::Purchases {
        &self.purchases
    }

    fn purchase_details(&self) -> &Self::PurchaseDetails {
        &self.purchase_details
    }

    fn purchases_v2(&self) -> &Self::PurchasesV2 {
        &self.purchases_v2
    }
}

/// Generates a repository over one table. Every table is keyed by a UUID `id`
/// column; rows map to documents through a pair of conversion functions.
macro_rules! db_repository {
    ($repo:ident, $doc:ty, $entity:ident, $module:ident, $from:ident, $to:ident) => {
        #[derive(Clone)]
        pub struct $repo {
            pub db: DatabaseConnection,
        }

        impl Repository for $repo {
            type Doc = $doc;

            async fn find_by_id(&self, id: Uuid) -> AppResult<Option<$doc>> {
                Ok($entity::find_by_id(id).one(&self.db).await?.map($from))
            }

            async fn find_all(&self) -> AppResult<Vec<$doc>> {
                Ok($entity::find()
                    .order_by_asc($module::Column::Id)
                    .all(&self.db)
                    .await?
                    .into_iter()
                    .map($from)
                    .collect())
            }

            async fn insert(&self, doc: &$doc) -> AppResult<()> {
                $to(doc).insert(&self.db).await?;
                Ok(())
            }

            async fn replace(&self, doc: &$doc) -> AppResult<bool> {
                let mut active = $to(doc);
                active.id = NotSet;
                let result = $entity::update_many()
                    .set(active)
                    .filter($module::Column::Id.eq(doc.id))
                    .exec(&self.db)
                    .await?;
                Ok(result.rows_affected > 0)
            }

            async fn delete(&self, id: Uuid) -> AppResult<bool> {
                let result = $entity::delete_by_id(id).exec(&self.db).await?;
                Ok(result.rows_affected > 0)
            }

            async fn exists(&self, id: Uuid) -> AppResult<bool> {
                Ok($entity::find_by_id(id).count(&self.db).await? > 0)
            }
        }
    };
}

db_repository!(DbUserRepository, User, Users, users, user_from_entity, user_to_active);
db_repository!(DbProviderRepository, Provider, Providers, providers, provider_from_entity, provider_to_active);
db_repository!(DbItemRepository, Item, Items, items, item_from_entity, item_to_active);
db_repository!(DbPurchaseRepository, Purchase, Purchases, purchases, purchase_from_entity, purchase_to_active);
db_repository!(
    DbPurchaseDetailRepository,
    PurchaseDetail,
    PurchaseDetails,
    purchase_details,
    detail_from_entity,
    detail_to_active
);
db_repository!(
    DbPurchaseV2Repository,
    PurchaseV2,
    PurchasesV2,
    purchases_v2,
    purchase_v2_from_entity,
    purchase_v2_to_active
);

impl PurchaseDetailRepository for DbPurchaseDetailRepository {
    async fn update_quantity(&self, id: Uuid, quantity: i32, total: Decimal) -> AppResult<bool> {
        let result = PurchaseDetails::update_many()
            .col_expr(purchase_details::Column::Quantity, Expr::value(quantity))
            .col_expr(purchase_details::Column::Total, Expr::value(total))
            .filter(purchase_details::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

impl PurchaseV2Repository for DbPurchaseV2Repository {
    async fn find_by_order_code(&self, purchase_order: &str) -> AppResult<Option<PurchaseV2>> {
        Ok(PurchasesV2::find()
            .filter(purchases_v2::Column::PurchaseOrder.eq(purchase_order))
            .order_by_asc(purchases_v2::Column::Id)
            .one(&self.db)
            .await?
            .map(purchase_v2_from_entity))
    }
}

// ── Row conversions ──────────────────────────────────────────────────────────

fn user_from_entity(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        address: model.address,
        telephone: model.telephone,
        role: Role {
            name: model.role_name,
        },
    }
}

fn user_to_active(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id),
        name: Set(user.name.clone()),
        email: Set(user.email.clone()),
        password_hash: Set(user.password_hash.clone()),
        address: Set(user.address.clone()),
        telephone: Set(user.telephone.clone()),
        role_name: Set(user.role.name.clone()),
    }
}

fn provider_from_entity(model: providers::Model) -> Provider {
    Provider {
        id: model.id,
        name: model.name,
        address: model.address,
        telephone: model.telephone,
    }
}

fn provider_to_active(provider: &Provider) -> providers::ActiveModel {
    providers::ActiveModel {
        id: Set(provider.id),
        name: Set(provider.name.clone()),
        address: Set(provider.address.clone()),
        telephone: Set(provider.telephone.clone()),
    }
}

fn item_from_entity(model: items::Model) -> Item {
    Item {
        id: model.id,
        name: model.name,
        code: model.code,
        unit_measure: model.unit_measure,
        price: model.price,
        description: model.description,
        provider_id: model.provider_id,
    }
}

fn item_to_active(item: &Item) -> items::ActiveModel {
    items::ActiveModel {
        id: Set(item.id),
        name: Set(item.name.clone()),
        code: Set(item.code.clone()),
        unit_measure: Set(item.unit_measure.clone()),
        price: Set(item.price),
        description: Set(item.description.clone()),
        provider_id: Set(item.provider_id),
    }
}

fn purchase_from_entity(model: purchases::Model) -> Purchase {
    Purchase {
        id: model.id,
        purchase_order: model.purchase_order,
        date: model.date.with_timezone(&Utc),
        status: model.status,
        user_id: model.user_id,
        provider_id: model.provider_id,
    }
}

fn purchase_to_active(purchase: &Purchase) -> purchases::ActiveModel {
    purchases::ActiveModel {
        id: Set(purchase.id),
        purchase_order: Set(purchase.purchase_order.clone()),
        date: Set(purchase.date.into()),
        status: Set(purchase.status.clone()),
        user_id: Set(purchase.user_id),
        provider_id: Set(purchase.provider_id),
    }
}

fn detail_from_entity(model: purchase_details::Model) -> PurchaseDetail {
    PurchaseDetail {
        id: model.id,
        quantity: model.quantity,
        total: model.total,
        item_id: model.item_id,
        purchase_id: model.purchase_id,
    }
}

fn detail_to_active(detail: &PurchaseDetail) -> purchase_details::ActiveModel {
    purchase_details::ActiveModel {
        id: Set(detail.id),
        quantity: Set(detail.quantity),
        total: Set(detail.total),
        item_id: Set(detail.item_id),
        purchase_id: Set(detail.purchase_id),
    }
}

fn purchase_v2_from_entity(model: purchases_v2::Model) -> PurchaseV2 {
    PurchaseV2 {
        id: model.id,
        purchase_order: model.purchase_order,
        date: model.date.with_timezone(&Utc),
        status: model.status,
        item_list: model
            .item_list
            .0
            .into_iter()
            .map(|line| PurchaseLineV2 {
                item_id: line.item_id,
                item: None,
                quantity: line.quantity,
                subtotal: line.subtotal,
            })
            .collect(),
        total: model.total,
        user_id: model.user_id,
        provider_id: model.provider_id,
    }
}

fn purchase_v2_to_active(purchase: &PurchaseV2) -> purchases_v2::ActiveModel {
    let lines = purchase
        .item_list
        .iter()
        .map(|line| LineRecord {
            item_id: line.item_id,
            quantity: line.quantity,
            subtotal: line.subtotal,
        })
        .collect();
    purchases_v2::ActiveModel {
        id: Set(purchase.id),
        purchase_order: Set(purchase.purchase_order.clone()),
        date: Set(purchase.date.into()),
        status: Set(purchase.status.clone()),
        item_list: Set(LineRecords(lines)),
        total: Set(purchase.total),
        user_id: Set(purchase.user_id),
        provider_id: Set(purchase.provider_id),
    }
}
