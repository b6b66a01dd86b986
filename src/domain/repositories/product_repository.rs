//! Repository trait for product persistence.

use crate::domain::entities::{Product, ProductType};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for products and their store associations.
///
/// The association set is part of the product aggregate: [`save`] writes the
/// product row and replaces its ordered store list in one step.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryProductRepository`] - in-process
/// - Test mocks available with `cfg(test)`
///
/// [`save`]: ProductRepository::save
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts a new product with no associations. The id is assigned here.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(
        &self,
        name: String,
        price: String,
        product_type: ProductType,
    ) -> Result<Product, AppError>;

    /// Finds a product by id.
    ///
    /// When `with_stores` is false the returned product has an empty `stores`
    /// list regardless of its associations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: Uuid, with_stores: bool) -> Result<Option<Product>, AppError>;

    /// Lists all products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_all(&self, with_stores: bool) -> Result<Vec<Product>, AppError>;

    /// Persists an existing product, including its full association set.
    ///
    /// Every store in `product.stores` must exist; the caller resolves them
    /// first. Returns the product as stored, with stores reloaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product no longer exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, product: Product) -> Result<Product, AppError>;

    /// Deletes a product and its associations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Counts stored products.
    async fn count(&self) -> Result<i64, AppError>;

    /// Counts stored product/store associations.
    async fn count_associations(&self) -> Result<i64, AppError>;

    /// Removes every product and association. Used by tests and the admin tool.
    async fn clear(&self) -> Result<(), AppError>;
}
