//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::TimeDelta;

use crate::cache::{FreshnessCache, SystemClock};
use crate::catalog::{query, ProductQuery};
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::models::{FiltersResponse, HealthResponse, ProductResponse, StatsResponse};
use crate::sheets::{GoogleSheetsClient, SheetProductRepository};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Freshness cache in front of the product repository
    pub catalog: Arc<FreshnessCache>,
    /// Image served for products without a usable image URL
    pub placeholder_image: String,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(catalog: FreshnessCache, placeholder_image: impl Into<String>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            placeholder_image: placeholder_image.into(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires the Google Sheets client, the sheet repository and a wall-clock
    /// freshness cache. Credentials are not checked here; see
    /// [`Config::sheets_credentials`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GoogleSheetsClient::new(config.sheets_timeout)?;
        let repository = SheetProductRepository::new(Arc::new(client), config.clone());
        let window = TimeDelta::seconds(config.cache_ttl.min(u64::from(u32::MAX)) as i64);
        let catalog = FreshnessCache::new(Arc::new(repository), Arc::new(SystemClock), window);
        Ok(Self::new(catalog, config.placeholder_image.clone()))
    }
}

/// Handler for GET /api/products
///
/// Lists products, optionally filtered by `type` and `category` and sorted
/// by `sort=price-asc|price-desc`.
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> Result<Json<Vec<ProductResponse>>> {
    let products = state.catalog.get_products().await?;

    let body = params
        .apply(&products)
        .iter()
        .map(|product| ProductResponse::from_product(product, &state.placeholder_image))
        .collect();

    Ok(Json(body))
}

/// Handler for GET /api/products/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>> {
    let product = state
        .catalog
        .get_product_by_id(&id)
        .await?
        .ok_or(CatalogError::NotFound(id))?;

    Ok(Json(ProductResponse::from_product(&product, &state.placeholder_image)))
}

/// Handler for GET /api/filters
///
/// Returns the distinct types and categories for the site's selectors.
pub async fn filters_handler(State(state): State<AppState>) -> Result<Json<FiltersResponse>> {
    let products = state.catalog.get_products().await?;

    Ok(Json(FiltersResponse {
        types: query::distinct_types(&products),
        categories: query::distinct_categories(&products),
    }))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.catalog.stats().await;
    Json(StatsResponse::new(stats, state.catalog.window().num_seconds()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
