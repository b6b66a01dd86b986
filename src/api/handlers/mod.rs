//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod product_stores;
pub mod products;
pub mod stores;

pub use health::health_handler;
pub use product_stores::{
    attach_store_handler, detach_store_handler, get_product_store_handler,
    list_product_stores_handler, replace_product_stores_handler,
};
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, product_list_handler,
    update_product_handler,
};
pub use stores::{
    create_store_handler, delete_store_handler, get_store_handler, store_list_handler,
    update_store_handler,
};

use uuid::Uuid;

/// Converts a client-supplied id into a lookup key.
///
/// Text that is not a UUID cannot name a record. It maps to the nil UUID,
/// which is never assigned, so the service reports the usual not-found error
/// in its normal resolution order.
pub(crate) fn lookup_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw).unwrap_or(Uuid::nil())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_id_parses_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(lookup_id(&id.to_string()), id);
    }

    #[test]
    fn test_lookup_id_maps_garbage_to_nil() {
        assert_eq!(lookup_id("not-a-uuid"), Uuid::nil());
        assert_eq!(lookup_id(""), Uuid::nil());
    }
}
