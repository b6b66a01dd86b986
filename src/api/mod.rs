//! REST API layer.
//!
//! Turns HTTP requests into service calls and service results into JSON.
//!
//! # Modules
//!
//! - [`dto`] - Request and response bodies
//! - [`handlers`] - One handler per endpoint
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table for `/api`

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
