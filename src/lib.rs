//! Sheet Catalog - A product catalog served from a Google Sheet
//!
//! Reads product rows from a spreadsheet, keeps them in a time-windowed
//! in-memory cache and answers filtered, sorted queries over HTTP.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod sheets;

pub use api::AppState;
pub use cache::FreshnessCache;
pub use catalog::Product;
pub use config::Config;
pub use error::CatalogError;
