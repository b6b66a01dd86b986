//! Store ↔ product association service.
//!
//! Associations are owned by the product: a product carries an ordered list of
//! stores. Every operation resolves the records it touches before it writes,
//! so a failed call never leaves a partial change behind.
//!
//! # Resolution order
//!
//! Operations that take both ids resolve the store first, then the product.
//! When both are missing the caller therefore sees the store message.

use std::sync::Arc;

use crate::application::services::product_service::product_not_found;
use crate::application::services::store_service::store_not_found;
use crate::domain::entities::{Product, Store};
use crate::domain::repositories::{ProductRepository, StoreRepository};
use crate::error::{AppError, messages};
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

/// Service for attaching, listing, replacing and detaching the stores of a
/// product.
pub struct ProductStoreService<P, S>
where
    P: ProductRepository + ?Sized,
    S: StoreRepository + ?Sized,
{
    product_repository: Arc<P>,
    store_repository: Arc<S>,
}

impl<P, S> ProductStoreService<P, S>
where
    P: ProductRepository + ?Sized,
    S: StoreRepository + ?Sized,
{
    /// Creates a new association service.
    pub fn new(product_repository: Arc<P>, store_repository: Arc<S>) -> Self {
        Self {
            product_repository,
            store_repository,
        }
    }

    /// Adds a store to a product's association set.
    ///
    /// No duplicate check is made: attaching an already associated store adds
    /// a second membership.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store or the product does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn attach_store(&self, product_id: Uuid, store_id: Uuid) -> Result<Product, AppError> {
        let store = self.resolve_store(store_id).await?;
        let mut product = self.resolve_product(product_id).await?;

        product.stores.push(store);
        let saved = self.product_repository.save(product).await?;

        info!(%product_id, %store_id, stores = saved.stores.len(), "Store attached to product");
        Ok(saved)
    }

    /// Returns the stores associated with a product, in association order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_stores(&self, product_id: Uuid) -> Result<Vec<Store>, AppError> {
        let product = self.resolve_product(product_id).await?;
        Ok(product.stores)
    }

    /// Returns one associated store of a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store or the product does not exist.
    /// Returns [`AppError::PreconditionFailed`] if the store is not associated
    /// with the product.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_store(&self, product_id: Uuid, store_id: Uuid) -> Result<Store, AppError> {
        let store = self.resolve_store(store_id).await?;
        let product = self.resolve_product(product_id).await?;

        product
            .find_store(store.id)
            .cloned()
            .ok_or_else(|| not_associated(product_id, store_id))
    }

    /// Replaces the whole association set of a product.
    ///
    /// Every id is resolved, in order, before anything is written; the first
    /// missing id aborts the call. The new set is exactly the resolved stores,
    /// duplicates included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product or any store does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn replace_stores(
        &self,
        product_id: Uuid,
        store_ids: &[Uuid],
    ) -> Result<Product, AppError> {
        let mut product = self.resolve_product(product_id).await?;

        let mut stores = Vec::with_capacity(store_ids.len());
        for &store_id in store_ids {
            stores.push(self.resolve_store(store_id).await?);
        }

        product.stores = stores;
        let saved = self.product_repository.save(product).await?;

        info!(%product_id, stores = saved.stores.len(), "Product stores replaced");
        Ok(saved)
    }

    /// Removes a store from a product's association set.
    ///
    /// Every membership with the store's id is removed; the other members
    /// keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store or the product does not exist.
    /// Returns [`AppError::PreconditionFailed`] if the store is not associated
    /// with the product.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn detach_store(&self, product_id: Uuid, store_id: Uuid) -> Result<(), AppError> {
        let store = self.resolve_store(store_id).await?;
        let mut product = self.resolve_product(product_id).await?;

        if product.find_store(store.id).is_none() {
            return Err(not_associated(product_id, store_id));
        }

        product.stores.retain(|s| s.id != store.id);
        self.product_repository.save(product).await?;

        info!(%product_id, %store_id, "Store detached from product");
        Ok(())
    }

    async fn resolve_store(&self, store_id: Uuid) -> Result<Store, AppError> {
        debug!(%store_id, "Resolving store");
        self.store_repository
            .find_by_id(store_id, false)
            .await?
            .ok_or_else(|| store_not_found(store_id))
    }

    async fn resolve_product(&self, product_id: Uuid) -> Result<Product, AppError> {
        debug!(%product_id, "Resolving product");
        self.product_repository
            .find_by_id(product_id, true)
            .await?
            .ok_or_else(|| product_not_found(product_id))
    }
}

fn not_associated(product_id: Uuid, store_id: Uuid) -> AppError {
    AppError::precondition_failed(
        messages::STORE_NOT_ASSOCIATED,
        json!({ "product_id": product_id, "store_id": store_id }),
    )
}
