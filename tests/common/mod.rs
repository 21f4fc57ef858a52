#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use uuid::Uuid;

use purchasing_api::{
    dto::{
        items::CreateItemRequest, providers::CreateProviderRequest, purchases::PurchaseRequest,
        users::CreateUserRequest,
    },
    error::AppResult,
    models::{Item, Provider, Purchase, PurchaseDetail, PurchaseV2, Role, User},
    repository::{PurchaseDetailRepository, PurchaseV2Repository, Repository, Store},
    services::{item_service, provider_service, purchase_service, user_service},
};

// ── Documents ────────────────────────────────────────────────────────────────

pub trait Doc: Clone + Send + Sync {
    fn id(&self) -> Uuid;

    /// What survives a write. Only v2 purchases carry transient state.
    fn stored(&self) -> Self {
        self.clone()
    }
}

impl Doc for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Doc for Provider {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Doc for Item {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Doc for Purchase {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Doc for PurchaseDetail {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Doc for PurchaseV2 {
    fn id(&self) -> Uuid {
        self.id
    }

    fn stored(&self) -> Self {
        let mut purchase = self.clone();
        for line in purchase.item_list.iter_mut() {
            line.item = None;
        }
        purchase
    }
}

// ── MemoryRepo ───────────────────────────────────────────────────────────────

pub struct MemoryRepo<T> {
    pub docs: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for MemoryRepo<T> {
    fn default() -> Self {
        Self {
            docs: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Doc> MemoryRepo<T> {
    /// Returns a shared handle to the stored documents for post-execution inspection.
    pub fn handle(&self) -> Arc<Mutex<Vec<T>>> {
        Arc::clone(&self.docs)
    }

    /// Removes a document behind the services' back, leaving references to it dangling.
    pub fn remove(&self, id: Uuid) {
        self.docs.lock().unwrap().retain(|d| d.id() != id);
    }
}

impl<T: Doc> Repository for MemoryRepo<T> {
    type Doc = T;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<T>> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id() == id)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<T>> {
        Ok(self.docs.lock().unwrap().clone())
    }

    async fn insert(&self, doc: &T) -> AppResult<()> {
        self.docs.lock().unwrap().push(doc.stored());
        Ok(())
    }

    async fn replace(&self, doc: &T) -> AppResult<bool> {
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|d| d.id() == doc.id()) {
            Some(existing) => {
                *existing = doc.stored();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut docs = self.docs.lock().unwrap();
        let before = docs.len();
        docs.retain(|d| d.id() != id);
        Ok(docs.len() != before)
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.docs.lock().unwrap().iter().any(|d| d.id() == id))
    }
}

impl PurchaseDetailRepository for MemoryRepo<PurchaseDetail> {
    async fn update_quantity(&self, id: Uuid, quantity: i32, total: Decimal) -> AppResult<bool> {
        let mut docs = self.docs.lock().unwrap();
        match docs.iter_mut().find(|d| d.id == id) {
            Some(detail) => {
                detail.quantity = quantity;
                detail.total = total;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl PurchaseV2Repository for MemoryRepo<PurchaseV2> {
    async fn find_by_order_code(&self, purchase_order: &str) -> AppResult<Option<PurchaseV2>> {
        Ok(self
            .docs
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.purchase_order == purchase_order)
            .cloned())
    }
}

// ── MemoryStore ──────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    pub users: MemoryRepo<User>,
    pub providers: MemoryRepo<Provider>,
    pub items: MemoryRepo<Item>,
    pub purchases: MemoryRepo<Purchase>,
    pub purchase_details: MemoryRepo<PurchaseDetail>,
    pub purchases_v2: MemoryRepo<PurchaseV2>,
}

impl Store for MemoryStore {
    type Users = MemoryRepo<User>;
    type Providers = MemoryRepo<Provider>;
    type Items = MemoryRepo<Item>;
    type Purchases = MemoryRepo<Purchase>;
    type PurchaseDetails = MemoryRepo<PurchaseDetail>;
    type PurchasesV2 = MemoryRepo<PurchaseV2>;

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

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub async fn create_provider(store: &MemoryStore, name: &str) -> Provider {
    provider_service::create_provider(
        store,
        CreateProviderRequest {
            name: name.into(),
            address: "12 Industrial Ave".into(),
            telephone: "555-0100".into(),
        },
    )
    .await
    .unwrap()
    .data
    .unwrap()
}

pub async fn create_user(store: &MemoryStore, email: &str) -> User {
    user_service::create_user(
        store,
        CreateUserRequest {
            name: "Buyer".into(),
            email: email.into(),
            password: "secret".into(),
            address: "1 Main St".into(),
            telephone: "555-0199".into(),
            role: Role {
                name: "purchasing".into(),
            },
        },
    )
    .await
    .unwrap()
    .data
    .unwrap()
}

/// Returns the item with its id, which the item view keeps outside the item body.
pub async fn create_item(store: &MemoryStore, provider_id: Uuid, price: Decimal) -> Item {
    let view = item_service::create_item(
        store,
        CreateItemRequest {
            name: "Copy paper".into(),
            code: "PAP-A4".into(),
            unit_measure: "box".into(),
            price,
            description: String::new(),
            provider_id,
        },
    )
    .await
    .unwrap()
    .data
    .unwrap();
    store.items.find_by_id(view.id).await.unwrap().unwrap()
}

pub async fn create_purchase(
    store: &MemoryStore,
    order: &str,
    user_id: Uuid,
    provider_id: Uuid,
) -> Purchase {
    purchase_service::create_purchase(
        store,
        PurchaseRequest {
            purchase_order: order.into(),
            status: "pending".into(),
            user_id,
            provider_id,
        },
    )
    .await
    .unwrap()
    .data
    .unwrap()
    .purchase
}

/// A provider, a user and one item from that provider.
pub struct Catalog {
    pub store: MemoryStore,
    pub provider: Provider,
    pub user: User,
    pub item: Item,
}

pub async fn catalog(price: Decimal) -> Catalog {
    let store = MemoryStore::default();
    let provider = create_provider(&store, "Acme").await;
    let user = create_user(&store, "buyer@example.com").await;
    let item = create_item(&store, provider.id, price).await;
    Catalog {
        store,
        provider,
        user,
        item,
    }
}
