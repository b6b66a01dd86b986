//! Store management service.

use std::sync::Arc;

use crate::domain::entities::{NewStore, Store};
use crate::domain::repositories::StoreRepository;
use crate::error::{AppError, messages};
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

/// Length, in characters, every store city code must have.
pub const CITY_CODE_LENGTH: usize = 3;

/// Service for store CRUD.
///
/// Every write validates that the city is a three-character code.
pub struct StoreService<R: StoreRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: StoreRepository + ?Sized> StoreService<R> {
    /// Creates a new store service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if the city is not 3 characters.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, input: NewStore) -> Result<Store, AppError> {
        validate_city(&input.city)?;

        let store = self.repository.create(input).await?;

        info!(store_id = %store.id, city = %store.city, "Store created");
        Ok(store)
    }

    /// Lists all stores with their products loaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_all(&self) -> Result<Vec<Store>, AppError> {
        self.repository.find_all(true).await
    }

    /// Retrieves a store with its products loaded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_one(&self, id: Uuid) -> Result<Store, AppError> {
        debug!(store_id = %id, "Loading store");
        self.repository
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| store_not_found(id))
    }

    /// Updates a store, overlaying the persisted record with the new fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store does not exist.
    /// Returns [`AppError::InvalidArgument`] if the city is not 3 characters.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, id: Uuid, input: NewStore) -> Result<Store, AppError> {
        let persisted = self
            .repository
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| store_not_found(id))?;

        validate_city(&input.city)?;

        let merged = Store {
            name: input.name,
            city: input.city,
            address: input.address,
            ..persisted
        };

        let updated = self.repository.save(merged).await?;

        info!(store_id = %id, "Store updated");
        Ok(updated)
    }

    /// Deletes a store. Product associations that reference it are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let store = self
            .repository
            .find_by_id(id, false)
            .await?
            .ok_or_else(|| store_not_found(id))?;

        self.repository.delete(store.id).await?;

        info!(store_id = %id, "Store deleted");
        Ok(())
    }

    /// Counts stored stores. Used by the health check.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Checks that a city code is exactly [`CITY_CODE_LENGTH`] characters.
///
/// # Errors
///
/// Returns [`AppError::InvalidArgument`] with the fixed message otherwise.
pub fn validate_city(city: &str) -> Result<(), AppError> {
    let length = city.chars().count();
    if length != CITY_CODE_LENGTH {
        return Err(AppError::invalid_argument(
            messages::INVALID_STORE_CITY,
            json!({ "city": city, "expected_length": CITY_CODE_LENGTH, "length": length }),
        ));
    }
    Ok(())
}

pub(crate) fn store_not_found(id: Uuid) -> AppError {
    AppError::not_found(messages::STORE_NOT_FOUND, json!({ "id": id }))
}
