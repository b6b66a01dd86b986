//! Product catalogue service.

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductType};
use crate::domain::repositories::ProductRepository;
use crate::error::{AppError, messages};
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

/// Service for product CRUD.
///
/// Every write validates the product type tag before touching storage:
/// only `"Perecedero"` and `"No perecedero"` are accepted.
pub struct ProductService<R: ProductRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    /// Creates a new product service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a product with an empty association set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if the type tag is not accepted.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, input: NewProduct) -> Result<Product, AppError> {
        let product_type = validate_product_type(&input.product_type)?;

        let product = self
            .repository
            .create(input.name, input.price, product_type)
            .await?;

        info!(product_id = %product.id, product_type = %product.product_type, "Product created");
        Ok(product)
    }

    /// Lists all products with their stores loaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        self.repository.find_all(true).await
    }

    /// Retrieves a product with its stores loaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_one(&self, id: Uuid) -> Result<Product, AppError> {
        debug!(product_id = %id, "Loading product");
        self.repository
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| product_not_found(id))
    }

    /// Updates a product.
    ///
    /// The persisted record is overlaid with the incoming fields; the id and
    /// the association set are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::InvalidArgument`] if the type tag is not accepted.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, id: Uuid, input: NewProduct) -> Result<Product, AppError> {
        let persisted = self
            .repository
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        let product_type = validate_product_type(&input.product_type)?;

        let merged = Product {
            name: input.name,
            price: input.price,
            product_type,
            ..persisted
        };

        let updated = self.repository.save(merged).await?;

        info!(product_id = %id, "Product updated");
        Ok(updated)
    }

    /// Deletes a product. Its associations go with it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let product = self
            .repository
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        self.repository.delete(product.id).await?;

        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

/// Checks a raw type tag against the accepted product types.
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] with the fixed message if `raw` is
/// not an exact match.
pub fn validate_product_type(raw: &str) -> Result<ProductType, AppError> {
    raw.parse::<ProductType>().map_err(|_| {
        AppError::invalid_argument(
            messages::INVALID_PRODUCT_TYPE,
            json!({
                "type": raw,
                "allowed": [ProductType::PERISHABLE, ProductType::NON_PERISHABLE],
            }),
        )
    })
}

pub(crate) fn product_not_found(id: Uuid) -> AppError {
    AppError::not_found(messages::PRODUCT_NOT_FOUND, json!({ "id": id }))
}
