//! Store entity.

use uuid::Uuid;

/// A physical store.
///
/// `product_ids` is the reverse side of the product association. It is filled
/// only when the store is loaded with its relations and is never written
/// through the store; associations are owned by [`super::Product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub address: String,
    pub product_ids: Vec<Uuid>,
}

impl Store {
    /// Creates a store without loaded relations.
    pub fn new(id: Uuid, name: String, city: String, address: String) -> Self {
        Self {
            id,
            name,
            city,
            address,
            product_ids: Vec::new(),
        }
    }

    /// Returns the same store with its reverse relation attached.
    pub fn with_products(mut self, product_ids: Vec<Uuid>) -> Self {
        self.product_ids = product_ids;
        self
    }
}

/// Raw input for creating or updating a store.
#[derive(Debug, Clone)]
pub struct NewStore {
    pub name: String,
    pub city: String,
    pub address: String,
}
