//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned to HTTP clients whenever the product source cannot be read.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products";

// == Catalog Error Enum ==
/// Unified error type for the catalog service.
///
/// Row-level problems never show up here; they are absorbed by the
/// repository as [`crate::catalog::RowRejection`]s.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Required credential or sheet identifier missing
    #[error("Missing Google Sheets configuration: {0}")]
    Configuration(String),

    /// Transport failure talking to Google
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service account token could not be minted or exchanged
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Non-2xx response from the Sheets values endpoint
    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Response body did not match the expected shape
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Requested product does not exist in the current snapshot
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CatalogError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            // Credentials and upstream details stay in the logs.
            _ => {
                tracing::error!(error = %self, "product source failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    FETCH_FAILED_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, CatalogError>;
