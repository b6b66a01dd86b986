//! In-memory implementation of store repository.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::memory_database::MemoryDatabase;
use crate::domain::entities::{NewStore, Store};
use crate::domain::repositories::StoreRepository;
use crate::error::{AppError, messages};

/// Store repository over a shared [`MemoryDatabase`].
pub struct MemoryStoreRepository {
    db: Arc<MemoryDatabase>,
}

impl MemoryStoreRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreRepository for MemoryStoreRepository {
    async fn create(&self, new_store: NewStore) -> Result<Store, AppError> {
        let mut tables = self.db.lock()?;

        let store = Store::new(
            Uuid::new_v4(),
            new_store.name,
            new_store.city,
            new_store.address,
        );
        tables.stores.push(store.clone());

        Ok(store)
    }

    async fn find_by_id(&self, id: Uuid, with_products: bool) -> Result<Option<Store>, AppError> {
        let tables = self.db.lock()?;

        Ok(tables.store(id).cloned().map(|s| {
            if with_products {
                s.with_products(tables.products_of(id))
            } else {
                s
            }
        }))
    }

    async fn find_all(&self, with_products: bool) -> Result<Vec<Store>, AppError> {
        let tables = self.db.lock()?;

        Ok(tables
            .stores
            .iter()
            .cloned()
            .map(|s| {
                if with_products {
                    let products = tables.products_of(s.id);
                    s.with_products(products)
                } else {
                    s
                }
            })
            .collect())
    }

    async fn save(&self, store: Store) -> Result<Store, AppError> {
        let mut tables = self.db.lock()?;

        let record = tables
            .stores
            .iter_mut()
            .find(|s| s.id == store.id)
            .ok_or_else(|| {
                AppError::not_found(messages::STORE_NOT_FOUND, json!({ "id": store.id }))
            })?;

        record.name = store.name.clone();
        record.city = store.city.clone();
        record.address = store.address.clone();

        Ok(store)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tables = self.db.lock()?;

        let before = tables.stores.len();
        tables.stores.retain(|s| s.id != id);
        if tables.stores.len() == before {
            return Err(AppError::not_found(
                messages::STORE_NOT_FOUND,
                json!({ "id": id }),
            ));
        }

        tables.links.retain(|l| l.store_id != id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.db.lock()?.stores.len() as i64)
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut tables = self.db.lock()?;
        tables.stores.clear();
        tables.links.clear();
        Ok(())
    }
}
