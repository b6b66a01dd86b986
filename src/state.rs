//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ProductService, ProductStoreService, StoreService};
use crate::domain::repositories::{ProductRepository, StoreRepository};
use crate::infrastructure::persistence::{
    MemoryDatabase, MemoryProductRepository, MemoryStoreRepository,
};

pub type DynProductService = ProductService<dyn ProductRepository>;
pub type DynStoreService = StoreService<dyn StoreRepository>;
pub type DynProductStoreService = ProductStoreService<dyn ProductRepository, dyn StoreRepository>;

/// Services wired to one storage backend.
///
/// Built once at startup (see [`crate::server::run`]) and cloned cheaply into
/// every request.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<DynProductService>,
    pub store_service: Arc<DynStoreService>,
    pub product_store_service: Arc<DynProductStoreService>,
    /// Backend label reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Wires all services to the given repositories.
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        store_repository: Arc<dyn StoreRepository>,
        storage: &'static str,
    ) -> Self {
        Self {
            product_service: Arc::new(ProductService::new(product_repository.clone())),
            store_service: Arc::new(StoreService::new(store_repository.clone())),
            product_store_service: Arc::new(ProductStoreService::new(
                product_repository,
                store_repository,
            )),
            storage,
        }
    }

    /// State backed by a fresh in-memory database.
    pub fn in_memory() -> Self {
        let db = Arc::new(MemoryDatabase::new());
        Self::new(
            Arc::new(MemoryProductRepository::new(db.clone())),
            Arc::new(MemoryStoreRepository::new(db)),
            "memory",
        )
    }
}
