//! PostgreSQL implementation of store repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewStore, Store};
use crate::domain::repositories::StoreRepository;
use crate::error::{AppError, messages};
use serde_json::json;

#[derive(sqlx::FromRow)]
struct StoreRow {
    id: Uuid,
    name: String,
    city: String,
    address: String,
}

impl From<StoreRow> for Store {
    fn from(r: StoreRow) -> Self {
        Store::new(r.id, r.name, r.city, r.address)
    }
}

#[derive(sqlx::FromRow)]
struct StoreProductRow {
    store_id: Uuid,
    product_id: Uuid,
}

/// PostgreSQL repository for stores.
///
/// The reverse product lookup reads `product_stores` by `store_id`; each
/// product appears once even when it lists the store several times.
pub struct PgStoreRepository {
    pool: Arc<PgPool>,
}

impl PgStoreRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn load_product_ids(&self, store_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Uuid>>, AppError> {
        let rows = sqlx::query_as::<_, StoreProductRow>(
            r#"
            SELECT ps.store_id, ps.product_id
            FROM product_stores ps
            JOIN products p ON p.id = ps.product_id
            WHERE ps.store_id = ANY($1)
            GROUP BY ps.store_id, ps.product_id, p.seq
            ORDER BY ps.store_id, p.seq
            "#,
        )
        .bind(store_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut grouped: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for r in rows {
            grouped.entry(r.store_id).or_default().push(r.product_id);
        }

        Ok(grouped)
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn create(&self, new_store: NewStore) -> Result<Store, AppError> {
        let row = sqlx::query_as::<_, StoreRow>(
            r#"
            INSERT INTO stores (id, name, city, address)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, city, address
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_store.name)
        .bind(new_store.city)
        .bind(new_store.address)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid, with_products: bool) -> Result<Option<Store>, AppError> {
        let row = sqlx::query_as::<_, StoreRow>(
            r#"
            SELECT id, name, city, address
            FROM stores
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let store = Store::from(row);
        if !with_products {
            return Ok(Some(store));
        }

        let product_ids = self
            .load_product_ids(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(Some(store.with_products(product_ids)))
    }

    async fn find_all(&self, with_products: bool) -> Result<Vec<Store>, AppError> {
        let rows = sqlx::query_as::<_, StoreRow>(
            r#"
            SELECT id, name, city, address
            FROM stores
            ORDER BY seq
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        if !with_products {
            return Ok(rows.into_iter().map(Store::from).collect());
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut product_ids = self.load_product_ids(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let products = product_ids.remove(&r.id).unwrap_or_default();
                Store::from(r).with_products(products)
            })
            .collect())
    }

    async fn save(&self, store: Store) -> Result<Store, AppError> {
        let row = sqlx::query_as::<_, StoreRow>(
            r#"
            UPDATE stores SET
                name    = $2,
                city    = $3,
                address = $4
            WHERE id = $1
            RETURNING id, name, city, address
            "#,
        )
        .bind(store.id)
        .bind(store.name)
        .bind(store.city)
        .bind(store.address)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let row = row.ok_or_else(|| {
            AppError::not_found(messages::STORE_NOT_FOUND, json!({ "id": store.id }))
        })?;

        Ok(Store::from(row).with_products(store.product_ids))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                messages::STORE_NOT_FOUND,
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM stores")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn clear(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM stores")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
