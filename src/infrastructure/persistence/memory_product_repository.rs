//! In-memory implementation of product repository.

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::memory_database::{LinkRecord, MemoryDatabase, ProductRecord, Tables};
use crate::domain::entities::{Product, ProductType};
use crate::domain::repositories::ProductRepository;
use crate::error::{AppError, messages};

/// Product repository over a shared [`MemoryDatabase`].
pub struct MemoryProductRepository {
    db: Arc<MemoryDatabase>,
}

impl MemoryProductRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

fn to_product(tables: &Tables, record: &ProductRecord, with_stores: bool) -> Product {
    let stores = if with_stores {
        tables.stores_of(record.id)
    } else {
        Vec::new()
    };

    Product::new(
        record.id,
        record.name.clone(),
        record.price.clone(),
        record.product_type,
        stores,
    )
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(
        &self,
        name: String,
        price: String,
        product_type: ProductType,
    ) -> Result<Product, AppError> {
        let mut tables = self.db.lock()?;

        let record = ProductRecord {
            id: Uuid::new_v4(),
            name,
            price,
            product_type,
        };
        let product = to_product(&tables, &record, false);
        tables.products.push(record);

        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid, with_stores: bool) -> Result<Option<Product>, AppError> {
        let tables = self.db.lock()?;

        Ok(tables
            .products
            .iter()
            .find(|p| p.id == id)
            .map(|p| to_product(&tables, p, with_stores)))
    }

    async fn find_all(&self, with_stores: bool) -> Result<Vec<Product>, AppError> {
        let tables = self.db.lock()?;

        Ok(tables
            .products
            .iter()
            .map(|p| to_product(&tables, p, with_stores))
            .collect())
    }

    async fn save(&self, product: Product) -> Result<Product, AppError> {
        let mut tables = self.db.lock()?;

        if let Some(missing) = product
            .stores
            .iter()
            .find(|s| tables.store(s.id).is_none())
        {
            // Same outcome as the foreign key violation in PostgreSQL.
            return Err(AppError::internal(
                "Association references a missing store",
                json!({ "product_id": product.id, "store_id": missing.id }),
            ));
        }

        let record = tables
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| {
                AppError::not_found(messages::PRODUCT_NOT_FOUND, json!({ "id": product.id }))
            })?;

        record.name = product.name;
        record.price = product.price;
        record.product_type = product.product_type;
        let record = record.clone();

        tables.links.retain(|l| l.product_id != product.id);
        tables
            .links
            .extend(product.stores.iter().map(|s| LinkRecord {
                product_id: product.id,
                store_id: s.id,
            }));

        Ok(to_product(&tables, &record, true))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tables = self.db.lock()?;

        let before = tables.products.len();
        tables.products.retain(|p| p.id != id);
        if tables.products.len() == before {
            return Err(AppError::not_found(
                messages::PRODUCT_NOT_FOUND,
                json!({ "id": id }),
            ));
        }

        tables.links.retain(|l| l.product_id != id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.db.lock()?.products.len() as i64)
    }

    async fn count_associations(&self) -> Result<i64, AppError> {
        Ok(self.db.lock()?.links.len() as i64)
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut tables = self.db.lock()?;
        tables.products.clear();
        tables.links.clear();
        Ok(())
    }
}
