//! DTOs for product endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::store::StoreItem;
use crate::domain::entities::{NewProduct, Product, ProductType};

/// Request body for `POST /api/products` and `PUT /api/products/{id}`.
///
/// Only presence is checked here; the type tag is validated by the service.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "price must not be empty"))]
    pub price: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub product_type: String,
}

impl From<ProductRequest> for NewProduct {
    fn from(r: ProductRequest) -> Self {
        NewProduct {
            name: r.name,
            price: r.price,
            product_type: r.product_type,
        }
    }
}

/// Product with its associated stores.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub stores: Vec<StoreItem>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: p.id,
            name: p.name,
            price: p.price,
            product_type: p.product_type,
            stores: p.stores.into_iter().map(StoreItem::from).collect(),
        }
    }
}
