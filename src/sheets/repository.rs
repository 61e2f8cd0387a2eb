//! Product Repository
//!
//! Fetches the sheet, parses every row and drops the ones that do not make
//! a valid product.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::catalog::{Cell, Product, RawRow, RowParser, RowRejection};
use crate::config::Config;
use crate::error::Result;
use crate::sheets::SpreadsheetSource;

// == Product Repository ==
/// Produces the full product list from the backing store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Reads every product. Malformed rows are skipped; source failures are errors.
    async fn fetch_all(&self) -> Result<Vec<Product>>;
}

// == Sheet Product Repository ==
/// [`ProductRepository`] reading a Google Sheet through a [`SpreadsheetSource`].
pub struct SheetProductRepository {
    source: Arc<dyn SpreadsheetSource>,
    config: Config,
    parser: RowParser,
    /// Sheet row number of the first cell in the configured range
    first_row: usize,
}

impl SheetProductRepository {
    /// Creates a repository using the credentials, range and default currency
    /// from `config`.
    pub fn new(source: Arc<dyn SpreadsheetSource>, config: Config) -> Self {
        let parser = RowParser::new(config.default_currency.clone());
        let first_row = first_row_of_range(&config.sheet_range);
        Self {
            source,
            config,
            parser,
            first_row,
        }
    }

    /// Parses raw rows, logging and dropping rejections.
    ///
    /// Ids stay unique: a row reusing an earlier id is rejected.
    pub fn parse_rows(&self, rows: Vec<Vec<Cell>>) -> Vec<Product> {
        let total = rows.len();
        let mut seen = HashSet::new();
        let mut products = Vec::with_capacity(total);

        for (offset, cells) in rows.into_iter().enumerate() {
            let sheet_row = self.first_row + offset;
            let outcome = self
                .parser
                .parse(&RawRow::from_cells(cells))
                .and_then(|product| {
                    if seen.insert(product.id.clone()) {
                        Ok(product)
                    } else {
                        Err(RowRejection::DuplicateId { id: product.id })
                    }
                });

            match outcome {
                Ok(product) => products.push(product),
                Err(rejection) => warn!(sheet_row, %rejection, "skipping sheet row"),
            }
        }

        info!(
            accepted = products.len(),
            rejected = total - products.len(),
            "parsed product rows"
        );
        products
    }
}

/// Row number where an A1 range starts: `A2:I` and `Products!A5:I` give 2
/// and 5, while whole-column ranges such as `A:I` start at row 1.
fn first_row_of_range(range: &str) -> usize {
    let cells = range.rsplit_once('!').map_or(range, |(_, cells)| cells);
    let start = cells.split(':').next().unwrap_or_default();
    let digits: String = start
        .trim_start_matches(|c: char| c.is_ascii_alphabetic() || c == '$')
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(1)
}

#[async_trait]
impl ProductRepository for SheetProductRepository {
    async fn fetch_all(&self) -> Result<Vec<Product>> {
        // Fails before any network access when configuration is incomplete.
        let credentials = self.config.sheets_credentials()?;

        let rows = self
            .source
            .read_range(&credentials, &self.config.sheet_range)
            .await?;

        if rows.is_empty() {
            warn!(sheet_id = %credentials.sheet_id, "no data found in Google Sheet");
            return Ok(Vec::new());
        }

        Ok(self.parse_rows(rows))
    }
}
