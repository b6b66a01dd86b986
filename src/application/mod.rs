//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::product_service::ProductService`] - Product CRUD and type validation
//! - [`services::store_service::StoreService`] - Store CRUD and city validation
//! - [`services::product_store_service::ProductStoreService`] - Store ↔ product associations

pub mod services;
