//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence contract the services depend on. Concrete
//! implementations live in `crate::infrastructure::persistence`:
//!
//! - PostgreSQL (`PgProductRepository`, `PgStoreRepository`)
//! - In-process memory (`MemoryProductRepository`, `MemoryStoreRepository`)
//!
//! Mock implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`ProductRepository`] - Products and their ordered store associations
//! - [`StoreRepository`] - Stores and the reverse product lookup

pub mod product_repository;
pub mod store_repository;

pub use product_repository::ProductRepository;
pub use store_repository::StoreRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use store_repository::MockStoreRepository;
