//! Catalog Module
//!
//! Product model, sheet row parsing and the pure query layer.

mod parser;
mod product;
pub mod query;
mod row;


// Re-export public types
pub use parser::{parse_in_stock, parse_price_cents, RowParser, RowRejection};
pub use product::Product;
pub use query::{ProductQuery, SortDirection};
pub use row::{Cell, Column, RawRow, COLUMN_COUNT};
