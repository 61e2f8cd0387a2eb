//! Response models for the catalog API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing HTTP response bodies. Listing query parameters are
//! deserialized straight into [`crate::catalog::ProductQuery`].

pub mod responses;

// Re-export commonly used types
pub use responses::{FiltersResponse, HealthResponse, ProductResponse, StatsResponse};
