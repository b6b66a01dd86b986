//! DTOs for store endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{NewStore, Store};

/// Request body for `POST /api/stores` and `PUT /api/stores/{id}`.
///
/// The city length rule is enforced by the service, not here.
#[derive(Debug, Deserialize, Validate)]
pub struct StoreRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "city must not be empty"))]
    pub city: String,

    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
}

impl From<StoreRequest> for NewStore {
    fn from(r: StoreRequest) -> Self {
        NewStore {
            name: r.name,
            city: r.city,
            address: r.address,
        }
    }
}

/// Store as embedded in a product's association list.
#[derive(Debug, Serialize)]
pub struct StoreItem {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub address: String,
}

impl From<Store> for StoreItem {
    fn from(s: Store) -> Self {
        StoreItem {
            id: s.id,
            name: s.name,
            city: s.city,
            address: s.address,
        }
    }
}

/// Store with the ids of the products that list it.
#[derive(Debug, Serialize)]
pub struct StoreResponse {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub address: String,
    pub products: Vec<Uuid>,
}

impl From<Store> for StoreResponse {
    fn from(s: Store) -> Self {
        StoreResponse {
            id: s.id,
            name: s.name,
            city: s.city,
            address: s.address,
            products: s.product_ids,
        }
    }
}
