//! Google Sheets Client
//!
//! [`SpreadsheetSource`] backed by the Sheets v4 `values` endpoint, authenticated
//! with a service account through the OAuth2 JWT bearer grant.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Cell;
use crate::error::{CatalogError, Result};
use crate::sheets::{SheetsCredentials, SpreadsheetSource};

/// Google's OAuth2 token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// Base URL of the Sheets API.
pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";

const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Claims of the self-signed service account assertion.
#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`. Google omits
/// `values` entirely when the range holds no data.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Cell>>,
}

// == Google Sheets Client ==
/// HTTP client for reading sheet ranges with service account credentials.
///
/// A fresh access token is requested for every read; the catalog cache keeps
/// reads infrequent. Failures are returned as-is, never retried.
#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    client: Client,
    token_url: String,
    api_base: String,
}

impl GoogleSheetsClient {
    /// Creates a client against Google's production endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("sheet_catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Points the client at different token and API endpoints.
    pub fn with_endpoints(
        mut self,
        token_url: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Self {
        self.token_url = token_url.into();
        self.api_base = api_base.into();
        self
    }

    // == Access Token ==
    /// Signs an RS256 assertion and exchanges it for a bearer token.
    async fn access_token(&self, credentials: &SheetsCredentials) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: &credentials.client_email,
            scope: READONLY_SCOPE,
            aud: &self.token_url,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())
            .map_err(|e| CatalogError::Auth(format!("invalid service account key: {e}")))?;
        let assertion = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)
            .map_err(|e| CatalogError::Auth(format!("could not sign assertion: {e}")))?;

        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CatalogError::Auth(format!(
                "token endpoint returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::Deserialize {
                context: "OAuth token response".to_string(),
                source: e,
            })?;
        debug!(client_email = %credentials.client_email, "obtained Google access token");
        Ok(token.access_token)
    }

    /// Builds `{api_base}/v4/spreadsheets/{sheet_id}/values/{range}`.
    fn values_url(&self, sheet_id: &str, range: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_base).map_err(|e| {
            CatalogError::Internal(format!("invalid Sheets API base {}: {e}", self.api_base))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                CatalogError::Internal(format!(
                    "Sheets API base {} cannot hold a path",
                    self.api_base
                ))
            })?
            .pop_if_empty()
            .extend(["v4", "spreadsheets", sheet_id, "values", range]);
        url.query_pairs_mut().append_pair("majorDimension", "ROWS");
        Ok(url)
    }
}

#[async_trait]
impl SpreadsheetSource for GoogleSheetsClient {
    async fn read_range(
        &self,
        credentials: &SheetsCredentials,
        range: &str,
    ) -> Result<Vec<Vec<Cell>>> {
        let token = self.access_token(credentials).await?;
        let url = self.values_url(&credentials.sheet_id, range)?;

        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let value_range: ValueRange =
            serde_json::from_str(&body).map_err(|e| CatalogError::Deserialize {
                context: format!("values of range {range}"),
                source: e,
            })?;

        debug!(
            sheet_id = %credentials.sheet_id,
            range,
            rows = value_range.values.len(),
            "read sheet range"
        );
        Ok(value_range.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_url() {
        let client = GoogleSheetsClient::new(5)
            .unwrap()
            .with_endpoints("http://localhost/token", "http://localhost:8080/");
        let url = client.values_url("sheet123", "Products!A2:I").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v4/spreadsheets/sheet123/values/Products!A2:I?majorDimension=ROWS"
        );
    }

    #[test]
    fn test_values_url_rejects_bad_base() {
        let client = GoogleSheetsClient::new(5)
            .unwrap()
            .with_endpoints("http://localhost/token", "not a url");
        assert!(matches!(
            client.values_url("sheet123", "A2:I"),
            Err(CatalogError::Internal(_))
        ));
    }

    #[test]
    fn test_value_range_without_values() {
        let parsed: ValueRange =
            serde_json::from_str(r#"{"range":"Sheet1!A2:I","majorDimension":"ROWS"}"#).unwrap();
        assert!(parsed.values.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_key_is_auth_error() {
        let client = GoogleSheetsClient::new(5).unwrap();
        let credentials =
            SheetsCredentials::from_parts(Some("svc@example.com"), Some("not a pem"), Some("s1"))
                .unwrap();
        let result = client.read_range(&credentials, "A2:I").await;
        assert!(matches!(result, Err(CatalogError::Auth(_))));
    }
}
