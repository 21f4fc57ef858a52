use sea_orm::DatabaseConnection;

use crate::repository::orm::OrmStore;

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
}

impl AppState {
    /// Repositories over the shared connection pool.
    pub fn store(&self) -> OrmStore {
        OrmStore::new(self.orm.clone())
    }
}
