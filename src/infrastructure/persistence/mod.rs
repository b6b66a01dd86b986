//! Repository implementations.
//!
//! Two backends implement the domain repository traits:
//!
//! - PostgreSQL via SQLx (`pg_*`), the production backend
//! - In-process memory (`memory_*`), for development and tests
//!
//! # Repositories
//!
//! - [`PgProductRepository`] / [`MemoryProductRepository`] - Products and associations
//! - [`PgStoreRepository`] / [`MemoryStoreRepository`] - Stores and reverse lookup

pub mod memory_database;
pub mod memory_product_repository;
pub mod memory_store_repository;
pub mod pg_product_repository;
pub mod pg_store_repository;

pub use memory_database::MemoryDatabase;
pub use memory_product_repository::MemoryProductRepository;
pub use memory_store_repository::MemoryStoreRepository;
pub use pg_product_repository::PgProductRepository;
pub use pg_store_repository::PgStoreRepository;
