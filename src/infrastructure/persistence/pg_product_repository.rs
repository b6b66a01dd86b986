//! PostgreSQL implementation of product repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Product, ProductType, Store};
use crate::domain::repositories::ProductRepository;
use crate::error::{AppError, messages};
use serde_json::json;

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    price: String,
    product_type: String,
}

impl ProductRow {
    fn into_product(self, stores: Vec<Store>) -> Result<Product, AppError> {
        let product_type = self.product_type.parse::<ProductType>().map_err(|e| {
            AppError::internal(
                "Stored product has an unknown type",
                json!({ "id": self.id, "reason": e.to_string() }),
            )
        })?;

        Ok(Product::new(
            self.id,
            self.name,
            self.price,
            product_type,
            stores,
        ))
    }
}

#[derive(sqlx::FromRow)]
struct LinkedStoreRow {
    product_id: Uuid,
    id: Uuid,
    name: String,
    city: String,
    address: String,
}

/// PostgreSQL repository for products.
///
/// Associations live in `product_stores`, ordered by `position`. Saving a
/// product rewrites its rows there inside the same transaction as the product
/// update.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Loads the ordered store lists of the given products in one query.
///
/// Takes any executor so `save` can read back inside its transaction.
async fn load_stores<'e, E>(
    executor: E,
    product_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<Store>>, AppError>
where
    E: sqlx::PgExecutor<'e>,
{
    let rows = sqlx::query_as::<_, LinkedStoreRow>(
        r#"
        SELECT ps.product_id, s.id, s.name, s.city, s.address
        FROM product_stores ps
        JOIN stores s ON s.id = ps.store_id
        WHERE ps.product_id = ANY($1)
        ORDER BY ps.product_id, ps.position
        "#,
    )
    .bind(product_ids)
    .fetch_all(executor)
    .await?;

    let mut grouped: HashMap<Uuid, Vec<Store>> = HashMap::new();
    for r in rows {
        grouped
            .entry(r.product_id)
            .or_default()
            .push(Store::new(r.id, r.name, r.city, r.address));
    }

    Ok(grouped)
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(
        &self,
        name: String,
        price: String,
        product_type: ProductType,
    ) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (id, name, price, product_type)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, product_type
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(price)
        .bind(product_type.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.into_product(Vec::new())
    }

    async fn find_by_id(&self, id: Uuid, with_stores: bool) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, product_type
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let stores = if with_stores {
            load_stores(self.pool.as_ref(), &[id])
                .await?
                .remove(&id)
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        row.into_product(stores).map(Some)
    }

    async fn find_all(&self, with_stores: bool) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, product_type
            FROM products
            ORDER BY seq
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut stores = if with_stores {
            let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
            load_stores(self.pool.as_ref(), &ids).await?
        } else {
            HashMap::new()
        };

        rows.into_iter()
            .map(|r| {
                let product_stores = stores.remove(&r.id).unwrap_or_default();
                r.into_product(product_stores)
            })
            .collect()
    }

    async fn save(&self, product: Product) -> Result<Product, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products SET
                name         = $2,
                price        = $3,
                product_type = $4
            WHERE id = $1
            RETURNING id, name, price, product_type
            "#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.price)
        .bind(product.product_type.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Err(AppError::not_found(
                messages::PRODUCT_NOT_FOUND,
                json!({ "id": product.id }),
            ));
        };

        sqlx::query("DELETE FROM product_stores WHERE product_id = $1")
            .bind(product.id)
            .execute(&mut *tx)
            .await?;

        if !product.stores.is_empty() {
            let store_ids = product.store_ids();
            let positions: Vec<i32> = (0..store_ids.len() as i32).collect();

            sqlx::query(
                r#"
                INSERT INTO product_stores (product_id, store_id, position)
                SELECT $1, t.store_id, t.position
                FROM UNNEST($2::uuid[], $3::int4[]) AS t(store_id, position)
                "#,
            )
            .bind(product.id)
            .bind(store_ids)
            .bind(positions)
            .execute(&mut *tx)
            .await?;
        }

        let stores = load_stores(&mut *tx, &[product.id])
            .await?
            .remove(&product.id)
            .unwrap_or_default();

        let saved = row.into_product(stores)?;
        tx.commit().await?;

        Ok(saved)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                messages::PRODUCT_NOT_FOUND,
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn count_associations(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM product_stores")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn clear(&self) -> Result<(), AppError> {
        // product_stores rows go with their products (ON DELETE CASCADE).
        sqlx::query("DELETE FROM products")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
