//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /api/products` - List products, filtered and sorted
//! - `GET /api/products/:id` - Get one product by id
//! - `GET /api/filters` - Distinct types and categories
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
