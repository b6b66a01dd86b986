//! Domain layer.
//!
//! Entities and the repository traits the rest of the crate is written against.
//! Nothing here depends on HTTP or on a particular database.

pub mod entities;
pub mod repositories;
