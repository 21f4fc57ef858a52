#![allow(async_fn_in_trait)]

//! Storage seams. Services only ever talk to these traits; `orm` provides the
//! PostgreSQL-backed implementation wired up in `AppState`.

pub mod orm;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Item, Provider, Purchase, PurchaseDetail, PurchaseV2, User};

/// One collection of documents addressed by id.
pub trait Repository: Send + Sync {
    type Doc;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Self::Doc>>;

    /// Every document, in insertion order.
    async fn find_all(&self) -> AppResult<Vec<Self::Doc>>;

    async fn insert(&self, doc: &Self::Doc) -> AppResult<()>;

    /// Overwrite the document carrying the same id. Returns `false` when no
    /// document matched.
    async fn replace(&self, doc: &Self::Doc) -> AppResult<bool>;

    /// Returns `false` when nothing was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Existence check used to guard writes that introduce a reference.
    async fn exists(&self, id: Uuid) -> AppResult<bool>;
}

pub trait PurchaseDetailRepository: Repository<Doc = PurchaseDetail> {
    /// Writes only `quantity` and `total`. Returns `false` when no row matched.
    async fn update_quantity(&self, id: Uuid, quantity: i32, total: Decimal) -> AppResult<bool>;
}

pub trait PurchaseV2Repository: Repository<Doc = PurchaseV2> {
    async fn find_by_order_code(&self, purchase_order: &str) -> AppResult<Option<PurchaseV2>>;
}

/// The full set of repositories a request may touch.
pub trait Store: Send + Sync {
    type Users: Repository<Doc = User>;
    type Providers: Repository<Doc = Provider>;
    type Items: Repository<Doc = Item>;
    type Purchases: Repository<Doc = Purchase>;
    type PurchaseDetails: PurchaseDetailRepository;
    type PurchasesV2: PurchaseV2Repository;

    fn users(&self) -> &Self::Users;
    fn providers(&self) -> &Self::Providers;
    fn items(&self) -> &Self::Items;
    fn purchases(&self) -> &Self::Purchases;
    fn purchase_details(&self) -> &Self::PurchaseDetails;
    fn purchases_v2(&self) -> &Self::PurchasesV2;
}
