//! Product Module
//!
//! Defines the catalog's core entity.

use serde::Serialize;

// == Product ==
/// A single catalog product parsed from one sheet row.
///
/// Products are shared read-only through [`crate::cache::ProductSnapshot`];
/// nothing mutates one after the parser builds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within a snapshot
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in currency minor units
    pub price_cents: u64,
    /// Currency code
    pub currency: String,
    /// Free-text classification, may be empty
    #[serde(rename = "type")]
    pub product_type: String,
    /// Free-text classification, may be empty
    pub category: String,
    /// Free-text description, may be empty
    pub description: String,
    /// Image location, `None` means "use placeholder"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Whether the product is currently available
    pub in_stock: bool,
}

impl Product {
    // == Formatted Price ==
    /// Renders the price with two decimals, using `₺` for Turkish lira and the
    /// currency code as prefix otherwise.
    pub fn formatted_price(&self) -> String {
        let symbol = if self.currency == "TRY" {
            "₺"
        } else {
            self.currency.as_str()
        };
        format!(
            "{}{}.{:02}",
            symbol,
            self.price_cents / 100,
            self.price_cents % 100
        )
    }

    // == Image Source ==
    /// Returns the image URL when it is absolute or site-relative, otherwise
    /// the given placeholder.
    pub fn image_src<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image_url.as_deref() {
            Some(url)
                if url.starts_with("http://")
                    || url.starts_with("https://")
                    || url.starts_with('/') =>
            {
                url
            }
            _ => placeholder,
        }
    }

    /// Path of the product detail page.
    pub fn detail_path(&self) -> String {
        format!("/p/{}", self.id)
    }
}
