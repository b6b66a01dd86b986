//! API route configuration.

use crate::api::handlers::{
    attach_store_handler, create_product_handler, create_store_handler, delete_product_handler,
    delete_store_handler, detach_store_handler, get_product_handler, get_product_store_handler,
    get_store_handler, list_product_stores_handler, product_list_handler,
    replace_product_stores_handler, store_list_handler, update_product_handler,
    update_store_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /products`                              - List products
/// - `POST   /products`                              - Create a product
/// - `GET    /products/{product_id}`                 - Get a product
/// - `PUT    /products/{product_id}`                 - Update a product
/// - `DELETE /products/{product_id}`                 - Delete a product
/// - `GET    /stores`                                - List stores
/// - `POST   /stores`                                - Create a store
/// - `GET    /stores/{store_id}`                     - Get a store
/// - `PUT    /stores/{store_id}`                     - Update a store
/// - `DELETE /stores/{store_id}`                     - Delete a store
/// - `GET    /products/{product_id}/stores`          - List stores of a product
/// - `PUT    /products/{product_id}/stores`          - Replace stores of a product
/// - `POST   /products/{product_id}/stores/{store_id}` - Attach a store
/// - `GET    /products/{product_id}/stores/{store_id}` - Get an attached store
/// - `DELETE /products/{product_id}/stores/{store_id}` - Detach a store
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(product_list_handler).post(create_product_handler),
        )
        .route(
            "/products/{product_id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .route(
            "/stores",
            get(store_list_handler).post(create_store_handler),
        )
        .route(
            "/stores/{store_id}",
            get(get_store_handler)
                .put(update_store_handler)
                .delete(delete_store_handler),
        )
        .route(
            "/products/{product_id}/stores",
            get(list_product_stores_handler).put(replace_product_stores_handler),
        )
        .route(
            "/products/{product_id}/stores/{store_id}",
            get(get_product_store_handler)
                .post(attach_store_handler)
                .delete(detach_store_handler),
        )
}
