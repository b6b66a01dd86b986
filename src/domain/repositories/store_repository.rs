//! Repository trait for store persistence.

use crate::domain::entities::{NewStore, Store};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for stores.
///
/// Stores never write associations. `with_products` only controls whether the
/// reverse lookup (`Store::product_ids`) is loaded.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Inserts a new store. The id is assigned here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_store: NewStore) -> Result<Store, AppError>;

    /// Finds a store by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: Uuid, with_products: bool) -> Result<Option<Store>, AppError>;

    /// Lists all stores in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_all(&self, with_products: bool) -> Result<Vec<Store>, AppError>;

    /// Persists the scalar fields of an existing store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store no longer exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, store: Store) -> Result<Store, AppError>;

    /// Deletes a store. Associations referencing it are removed as well.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Counts stored stores.
    async fn count(&self) -> Result<i64, AppError>;

    /// Removes every store (and, through them, every association).
    async fn clear(&self) -> Result<(), AppError>;
}
