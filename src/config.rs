//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_TTL_SECS;
use crate::error::Result;
use crate::sheets::SheetsCredentials;

/// Service configuration parameters.
///
/// Tunables fall back to sensible defaults. The three Google values are kept
/// optional here and validated on every fetch, so a misconfigured server still
/// starts and reports the problem per request.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Seconds a product snapshot stays fresh
    pub cache_ttl: u64,
    /// Currency code used when a row leaves the currency column empty
    pub default_currency: String,
    /// A1 range to read, starting below the header row
    pub sheet_range: String,
    /// Image served for products without a usable image URL
    pub placeholder_image: String,
    /// Request timeout for Google API calls in seconds
    pub sheets_timeout: u64,
    /// Service account e-mail
    pub google_client_email: Option<String>,
    /// Service account private key (PEM, may contain literal `\n`)
    pub google_private_key: Option<String>,
    /// Spreadsheet identifier
    pub google_sheet_id: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL_SECS` - Snapshot validity window in seconds (default: 300)
    /// - `DEFAULT_CURRENCY` - Fallback currency code (default: TRY)
    /// - `GOOGLE_SHEET_RANGE` - Range to read (default: A2:I)
    /// - `PLACEHOLDER_IMAGE` - Placeholder image path (default: /placeholder.jpg)
    /// - `SHEETS_TIMEOUT_SECS` - Google API timeout (default: 30)
    /// - `GOOGLE_CLIENT_EMAIL`, `GOOGLE_PRIVATE_KEY`, `GOOGLE_SHEET_ID` - no default
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            default_currency: non_empty_var("DEFAULT_CURRENCY")
                .unwrap_or(defaults.default_currency),
            sheet_range: non_empty_var("GOOGLE_SHEET_RANGE").unwrap_or(defaults.sheet_range),
            placeholder_image: non_empty_var("PLACEHOLDER_IMAGE")
                .unwrap_or(defaults.placeholder_image),
            sheets_timeout: env::var("SHEETS_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sheets_timeout),
            google_client_email: non_empty_var("GOOGLE_CLIENT_EMAIL"),
            google_private_key: non_empty_var("GOOGLE_PRIVATE_KEY"),
            google_sheet_id: non_empty_var("GOOGLE_SHEET_ID"),
        }
    }

    /// Validates and assembles the Google credentials.
    ///
    /// Fails with a configuration error naming every missing variable.
    pub fn sheets_credentials(&self) -> Result<SheetsCredentials> {
        SheetsCredentials::from_parts(
            self.google_client_email.as_deref(),
            self.google_private_key.as_deref(),
            self.google_sheet_id.as_deref(),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: DEFAULT_TTL_SECS,
            default_currency: "TRY".to_string(),
            sheet_range: "A2:I".to_string(),
            placeholder_image: "/placeholder.jpg".to_string(),
            sheets_timeout: 30,
            google_client_email: None,
            google_private_key: None,
            google_sheet_id: None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
