//! Business logic services for the application layer.

pub mod product_service;
pub mod product_store_service;
pub mod store_service;

pub use product_service::ProductService;
pub use product_store_service::ProductStoreService;
pub use store_service::StoreService;
