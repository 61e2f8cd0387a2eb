//! Row Parser Module
//!
//! Turns a [`RawRow`] into a [`Product`] or an explicit [`RowRejection`].
//! Every input maps to exactly one of the two; nothing here panics.

use thiserror::Error;

use crate::catalog::{Cell, Column, Product, RawRow};

/// Textual in-stock tokens that count as "available" (compared case-insensitively).
const TRUTHY_TOKENS: [&str; 3] = ["true", "1", "yes"];

// == Row Rejection ==
/// Reason a sheet row did not become a product.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    /// A required column trimmed to empty
    #[error("incomplete row: missing {}", .missing.label())]
    IncompleteRow { missing: Column },

    /// Another row earlier in the same fetch already used this id
    #[error("duplicate product id: {id}")]
    DuplicateId { id: String },
}

// == Row Parser ==
/// Stateless row parser carrying the configured fallback currency.
#[derive(Debug, Clone)]
pub struct RowParser {
    default_currency: String,
}

impl RowParser {
    // == Constructor ==
    /// Creates a parser that fills empty currency cells with `default_currency`.
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
        }
    }

    // == Parse ==
    /// Parses one row.
    ///
    /// `id` and `name` are required; every other column falls back to a
    /// default instead of rejecting the row.
    pub fn parse(&self, row: &RawRow) -> Result<Product, RowRejection> {
        let id = trimmed(row.id());
        if id.is_empty() {
            return Err(RowRejection::IncompleteRow {
                missing: Column::Id,
            });
        }

        let name = trimmed(row.name());
        if name.is_empty() {
            return Err(RowRejection::IncompleteRow {
                missing: Column::Name,
            });
        }

        let currency = trimmed(row.currency());
        let image_url = trimmed(row.image_url());

        Ok(Product {
            id,
            name,
            price_cents: parse_price_cents(row.price_cents()),
            currency: if currency.is_empty() {
                self.default_currency.clone()
            } else {
                currency
            },
            product_type: trimmed(row.product_type()),
            category: trimmed(row.category()),
            description: trimmed(row.description()),
            image_url: (!image_url.is_empty()).then_some(image_url),
            in_stock: parse_in_stock(row.in_stock()),
        })
    }
}

fn trimmed(cell: Option<&Cell>) -> String {
    cell.map(Cell::to_trimmed_string).unwrap_or_default()
}

// == Price ==
/// Non-negative integers parse as-is, non-negative decimals truncate,
/// everything else is zero.
pub fn parse_price_cents(cell: Option<&Cell>) -> u64 {
    let value = match cell {
        Some(Cell::Number(n)) => *n,
        Some(Cell::Text(text)) => {
            let text = text.trim();
            if let Ok(cents) = text.parse::<u64>() {
                return cents;
            }
            match text.parse::<f64>() {
                Ok(n) => n,
                Err(_) => return 0,
            }
        }
        Some(Cell::Bool(_)) | None => return 0,
    };

    if value.is_finite() && value >= 0.0 && value < u64::MAX as f64 {
        value.trunc() as u64
    } else {
        0
    }
}

// == In Stock ==
/// Absent or blank cells mean "in stock"; otherwise only truthy tokens do.
pub fn parse_in_stock(cell: Option<&Cell>) -> bool {
    match cell {
        None => true,
        Some(Cell::Bool(b)) => *b,
        Some(Cell::Number(n)) => *n == 1.0,
        Some(Cell::Text(text)) => {
            let token = text.trim();
            token.is_empty()
                || TRUTHY_TOKENS
                    .iter()
                    .any(|truthy| token.eq_ignore_ascii_case(truthy))
        }
    }
}
