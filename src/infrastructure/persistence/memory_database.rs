//! Shared in-process tables backing the memory repositories.

use std::sync::{Mutex, MutexGuard};

use serde_json::json;
use uuid::Uuid;

use crate::domain::entities::{ProductType, Store};
use crate::error::AppError;

#[derive(Debug, Clone)]
pub(super) struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    pub product_type: ProductType,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct LinkRecord {
    pub product_id: Uuid,
    pub store_id: Uuid,
}

/// Table contents. Vectors keep insertion order, which is the listing order.
#[derive(Debug, Default)]
pub(super) struct Tables {
    pub products: Vec<ProductRecord>,
    pub stores: Vec<Store>,
    /// Associations in order; for a given product, the order of its entries is
    /// the order of its store list.
    pub links: Vec<LinkRecord>,
}

impl Tables {
    pub fn store(&self, id: Uuid) -> Option<&Store> {
        self.stores.iter().find(|s| s.id == id)
    }

    pub fn stores_of(&self, product_id: Uuid) -> Vec<Store> {
        self.links
            .iter()
            .filter(|l| l.product_id == product_id)
            .filter_map(|l| self.store(l.store_id).cloned())
            .collect()
    }

    /// Distinct ids of products listing the store, in product insertion order.
    pub fn products_of(&self, store_id: Uuid) -> Vec<Uuid> {
        self.products
            .iter()
            .filter(|p| {
                self.links
                    .iter()
                    .any(|l| l.product_id == p.id && l.store_id == store_id)
            })
            .map(|p| p.id)
            .collect()
    }
}

/// In-memory database shared by [`super::MemoryProductRepository`] and
/// [`super::MemoryStoreRepository`].
///
/// Deleting a product or a store removes the links that reference it, the
/// same way the PostgreSQL schema cascades. Each repository call holds the
/// lock for its whole duration, so every call is atomic.
///
/// # Use Cases
///
/// - Local development without PostgreSQL (`STORAGE_BACKEND=memory`)
/// - Handler and service tests
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    tables: Mutex<Tables>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        tracing::debug!("Using in-memory storage");
        Self::default()
    }

    pub(super) fn lock(&self) -> Result<MutexGuard<'_, Tables>, AppError> {
        self.tables.lock().map_err(|e| {
            tracing::error!(error = %e, "Memory storage lock poisoned");
            AppError::internal("Storage unavailable", json!({ "reason": e.to_string() }))
        })
    }
}
