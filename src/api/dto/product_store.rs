//! DTOs for product/store association endpoints.

use serde::Deserialize;

/// One entry of the `PUT /api/products/{id}/stores` body.
///
/// Only `id` is read; any other store fields sent by the client are ignored
/// and the stored values are used instead.
#[derive(Debug, Deserialize)]
pub struct StoreReference {
    pub id: String,
}
