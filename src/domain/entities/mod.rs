//! Core domain entities representing the catalogue data model.
//!
//! # Entity Types
//!
//! - [`Product`] - A catalogue item with its ordered set of associated stores
//! - [`Store`] - A physical store, with the ids of products that reference it
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for input:
//! - `NewProduct`, `NewStore` - Raw field values for creation and update,
//!   validated by the services before they reach a repository
//!
//! The relation is held as plain values on the product side only; the reverse
//! direction (`Store::product_ids`) is loaded by query.

pub mod product;
pub mod store;

pub use product::{NewProduct, Product, ProductType};
pub use store::{NewStore, Store};
